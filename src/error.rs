//! Error types for the login flow and token storage.
//!
//! Every [`LoginError`] variant collapses into the same user-facing failure
//! message; the variants exist so the cause can be logged.

use thiserror::Error;

/// Errors raised by a [`crate::domain::ports::TokenStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Token store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Token store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Token store connection error: {0}")]
    Connection(String),

    #[error("Token store operation error: {0}")]
    Operation(String),
}

/// Result type for token store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Reasons a login attempt did not end on the dashboard.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The request never produced an HTTP response (DNS, refused connection, timeout).
    #[error("Token request failed: {0}")]
    Transport(String),

    /// The token service answered with a non-2xx status.
    #[error("Token service rejected the credentials with status {status}")]
    Rejected { status: u16 },

    /// A 2xx response whose body is not a token pair.
    #[error("Token service returned a malformed body: {0}")]
    MalformedResponse(String),

    /// Tokens were issued but could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LoginError {
    /// Short machine-readable label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Rejected { .. } => "rejected",
            Self::MalformedResponse(_) => "malformed_response",
            Self::Store(_) => "store",
        }
    }
}

impl From<reqwest::Error> for LoginError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return Self::MalformedResponse(e.to_string());
        }
        if let Some(status) = e.status() {
            return Self::Rejected {
                status: status.as_u16(),
            };
        }
        Self::Transport(e.to_string())
    }
}
