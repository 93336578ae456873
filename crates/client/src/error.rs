use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotifyError>;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// The compact client token could not be decoded. Fatal at init.
    #[error("Invalid client identifier: {0}")]
    InvalidIdentifier(String),

    /// The review service rejected a request with a structured error body.
    /// Logged and suppressed per endpoint.
    #[error("Review API error (status {status}): {message}")]
    Application { status: u16, message: String },

    /// Any other network or HTTP failure. Fails the aggregate notify call.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        NotifyError::Transport(err.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Classify a non-success response (status >= 400) into the error taxonomy.
///
/// A JSON body carrying a `message` field is an application-level rejection
/// from the review service; anything else is a transport failure.
pub fn classify(status: u16, body: &str) -> NotifyError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => NotifyError::Application { status, message: parsed.message },
        Err(_) => NotifyError::Transport(format!("HTTP {status}: {body}")),
    }
}
