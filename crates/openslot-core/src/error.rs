//! Error Types

use thiserror::Error;

/// Result type alias for subscription operations
pub type Result<T> = std::result::Result<T, SubscribeError>;

/// Shown when the service rejects a request without a usable `detail`
pub const FALLBACK_REJECTION: &str = "Something went wrong";

/// Shown when the service could not be reached or answered garbage
pub const TRANSPORT_FAILURE: &str = "Failed to connect to server";

/// Subscription error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubscribeError {
    /// The service answered with a non-2xx status
    #[error("Subscription rejected ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    /// The request could not be sent or the response could not be parsed
    #[error("Transport error: {0}")]
    Transport(String),
}

impl SubscribeError {
    /// Convert to the message shown next to the form
    pub fn user_message(&self) -> String {
        match self {
            SubscribeError::Rejected { detail: Some(detail), .. } => detail.clone(),
            SubscribeError::Rejected { detail: None, .. } => FALLBACK_REJECTION.into(),
            SubscribeError::Transport(_) => TRANSPORT_FAILURE.into(),
        }
    }
}

impl From<reqwest::Error> for SubscribeError {
    fn from(err: reqwest::Error) -> Self {
        SubscribeError::Transport(err.to_string())
    }
}
