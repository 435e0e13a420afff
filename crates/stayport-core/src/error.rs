//! Error types for the Stayport system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StayError {
    /// Malformed input detected before any network call (bad dates,
    /// guest count out of range, incomplete payment fields). Surfaced
    /// directly to the caller, never retried.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The backend was reachable but rejected the request.
    #[error("Request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    /// The backend was unreachable and the operation is trust-sensitive,
    /// so no substitute response may be fabricated.
    #[error("Service unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    /// A response did not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl StayError {
    pub fn validation(message: impl Into<String>) -> Self {
        StayError::Validation {
            message: message.into(),
        }
    }
}

pub type StayResult<T> = Result<T, StayError>;
