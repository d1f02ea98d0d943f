use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::gemini::error::GeminiError;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
pub const DEFAULT_MAX_RETRIES: u32 = 3;

pub const INITIAL_BACKOFF: Duration = Duration::from_millis(1000);

/// Blocking client for the Gemini generateContent endpoint.
///
/// Each `generate` call owns its own attempt counter and backoff delay, so a
/// single client can be shared across threads without coordination.
pub struct GeminiClient {
    pub endpoint: String,
    pub model: String,
    pub max_retries: u32,
    initial_backoff: Duration,
    backoff_cap: Option<Duration>,
    verbose: u8,
    http: reqwest::blocking::Client,
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }
}

impl GeminiClient {
    pub fn new(endpoint: &str, model: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff: INITIAL_BACKOFF,
            backoff_cap: None,
            verbose: 0,
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        // At least one attempt is always made
        self.max_retries = max_retries.max(1);
        self
    }

    /// Override the backoff schedule. The cap, when set, bounds the doubling;
    /// without it the delay keeps doubling unbounded.
    pub fn with_backoff(mut self, initial: Duration, cap: Option<Duration>) -> Self {
        self.initial_backoff = initial;
        self.backoff_cap = cap;
        self
    }

    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    /// Send `prompt` to the generateContent endpoint and return the first
    /// candidate's text.
    ///
    /// Retries on 429, 5xx, and transport failures with exponential backoff
    /// (1s, 2s, 4s, ...); any other HTTP error fails immediately. A missing
    /// `candidates[0].content.parts[0].text` path in a success response is an
    /// empty result, not an error.
    pub fn generate(&self, prompt: &str, api_key: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, api_key
        );
        let body = GenerateRequest::for_prompt(prompt);

        let mut delay = self.initial_backoff;
        let mut attempt = 0u32;

        loop {
            attempt += 1;

            let failure = match self.http.post(&url).json(&body).send() {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        match response.json::<GenerateResponse>() {
                            Ok(parsed) => return Ok(parsed.first_text()),
                            // Unreadable success body: same class as a network
                            // failure, subject to the same retry policy
                            Err(e) => GeminiError::Transport(e),
                        }
                    } else {
                        let message = response
                            .json::<ApiErrorBody>()
                            .ok()
                            .and_then(|body| body.error)
                            .and_then(|detail| detail.message);
                        GeminiError::Api {
                            status: status.as_u16(),
                            message,
                        }
                    }
                }
                Err(e) => GeminiError::Transport(e),
            };

            if !failure.is_retryable() || attempt >= self.max_retries {
                return Err(failure);
            }

            if self.verbose > 0 {
                eprintln!(
                    "Transient API failure ({}), retrying in {:?} (attempt {} of {})...",
                    failure, delay, attempt, self.max_retries
                );
            }

            thread::sleep(delay);
            delay = self.next_delay(delay);
        }
    }

    fn next_delay(&self, current: Duration) -> Duration {
        let doubled = current * 2;
        match self.backoff_cap {
            Some(cap) => doubled.min(cap),
            None => doubled,
        }
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

impl GenerateRequest {
    fn for_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Default)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    fn first_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}
