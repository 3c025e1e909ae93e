//! Send failures

use thiserror::Error;

/// Why a send did not go through. All variants are handled alike by the
/// submission pipeline; the distinction only matters for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("email service rejected the request (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<reqwest::Error> for SendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SendError::Timeout(err.to_string())
        } else {
            SendError::Network(err.to_string())
        }
    }
}
