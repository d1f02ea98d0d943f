use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Instant;

// =========================================================================
// Scripted mock HTTP server
// =========================================================================

/// One canned HTTP response the server plays back for one request.
pub struct ScriptedResponse {
    pub status: u16,
    pub reason: &'static str,
    pub body: String,
}

pub fn rate_limited() -> ScriptedResponse {
    ScriptedResponse {
        status: 429,
        reason: "Too Many Requests",
        body: r#"{"error":{"message":"Resource has been exhausted"}}"#.to_string(),
    }
}

pub fn server_error() -> ScriptedResponse {
    ScriptedResponse {
        status: 500,
        reason: "Internal Server Error",
        body: r#"{"error":{"message":"Internal error encountered"}}"#.to_string(),
    }
}

pub fn bad_request() -> ScriptedResponse {
    ScriptedResponse {
        status: 400,
        reason: "Bad Request",
        body: r#"{"error":{"message":"API key not valid"}}"#.to_string(),
    }
}

pub fn success(body: &str) -> ScriptedResponse {
    ScriptedResponse {
        status: 200,
        reason: "OK",
        body: body.to_string(),
    }
}

/// What the server saw for one request: arrival time, request line, body.
pub struct RequestRecord {
    pub at: Instant,
    pub request_line: String,
    pub body: String,
}

/// Plays back a scripted sequence of responses, one connection per request,
/// and records what the client sent. `finish()` joins the server thread and
/// returns the records for inspection.
pub struct TestServer {
    addr: SocketAddr,
    records: Arc<Mutex<Vec<RequestRecord>>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub fn start(responses: Vec<ScriptedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let records = Arc::new(Mutex::new(Vec::new()));
        let thread_records = records.clone();

        let handle = std::thread::spawn(move || {
            for response in responses {
                let (mut stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let (request_line, body) = read_request(&mut stream);
                thread_records.lock().unwrap().push(RequestRecord {
                    at: Instant::now(),
                    request_line,
                    body,
                });
                write_response(&mut stream, &response);
            }
        });

        Self {
            addr,
            records,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Wait for the script to play out and return the recorded requests.
    pub fn finish(self) -> Vec<RequestRecord> {
        self.handle.join().unwrap();
        match Arc::try_unwrap(self.records) {
            Ok(mutex) => mutex.into_inner().unwrap(),
            Err(_) => panic!("server records still shared after join"),
        }
    }
}

fn read_request(stream: &mut TcpStream) -> (String, String) {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    let _ = reader.read_line(&mut request_line);
    let request_line = request_line.trim_end().to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        if let Some(value) = trimmed.to_ascii_lowercase().strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
    }

    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        let _ = reader.read_exact(&mut body);
    }

    (request_line, String::from_utf8_lossy(&body).into_owned())
}

fn write_response(stream: &mut TcpStream, response: &ScriptedResponse) {
    let payload = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        response.reason,
        response.body.len(),
        response.body
    );
    let _ = stream.write_all(payload.as_bytes());
    let _ = stream.flush();
}
