//! Unified SDK error types.

use thiserror::Error;

/// Top-level client error.
///
/// `NotFound` gets a dedicated variant because the backend signals "no such
/// entity" through the response envelope (absent `data`), not through HTTP
/// status codes alone. Callers branch on `data` presence; transport status is
/// secondary.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request exceeded the fixed 10-second budget.
    #[error("Request timed out")]
    Timeout,

    /// Connection-level failure before a response was received.
    #[error("Request failed: {0}")]
    Transport(reqwest::Error),

    /// Non-2xx response that does not reduce to an envelope-level not-found.
    /// `message` carries the envelope's `error` string when present, otherwise
    /// the raw body.
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// The envelope carried no `data` for a singular-entity lookup.
    #[error("{0}")]
    NotFound(&'static str),

    /// The response body was not a valid envelope.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Transport(e)
        }
    }
}
