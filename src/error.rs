//! Failure values produced by service collaborators.
//!
//! Effects convert these into failure mutations; screens forward them to
//! their `error` side channel. The type is `Clone` so the same value can
//! reach every subscriber.

use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Request never produced a usable response (connect, timeout, TLS).
    #[error("Network error: {message}")]
    Transport { message: String },

    /// Response body did not match the expected shape.
    #[error("Malformed response: {message}")]
    Decode { message: String },

    /// Server-reported business error.
    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Input failed local validation (e.g. no map position picked).
    #[error("{message}")]
    Invalid { message: String },

    /// The operation needs something the current state does not have.
    #[error("Precondition failed: {message}")]
    Precondition { message: String },
}

impl ServiceError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    /// Text suitable for an alert or toast.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Transport { .. } => "Check your network connection and try again".to_string(),
            ServiceError::Decode { .. } => "Something went wrong. Please try again later".to_string(),
            ServiceError::Rejected { message, .. }
            | ServiceError::Invalid { message }
            | ServiceError::Precondition { message } => message.clone(),
        }
    }

    /// Whether a user-initiated retry has a chance of succeeding.
    pub fn is_retryable(&self) -> bool {
        match self {
            ServiceError::Transport { .. } => true,
            ServiceError::Rejected { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
