use std::fmt;

#[derive(Debug)]
pub enum GeminiError {
    /// The API answered with a non-success HTTP status. Carries the
    /// server-provided error message when the body had one.
    Api { status: u16, message: Option<String> },

    /// The request never produced a usable HTTP response (connect failure,
    /// timeout, unreadable body).
    Transport(reqwest::Error),
}

impl GeminiError {
    /// Whether this failure is worth another attempt: rate limiting (429),
    /// server errors (5xx), and transport failures. Every other status is
    /// terminal on first sight.
    pub fn is_retryable(&self) -> bool {
        match self {
            GeminiError::Api { status, .. } => *status == 429 || *status >= 500,
            GeminiError::Transport(_) => true,
        }
    }
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeminiError::Api { status, message } => match message {
                Some(msg) => write!(f, "{}", msg),
                None => write!(f, "API error: {}", status),
            },
            GeminiError::Transport(source) => write!(f, "{}", source),
        }
    }
}

impl std::error::Error for GeminiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeminiError::Api { .. } => None,
            GeminiError::Transport(source) => Some(source),
        }
    }
}
