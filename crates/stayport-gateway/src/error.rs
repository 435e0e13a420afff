//! Gateway-specific error types and conversions.

use stayport_core::error::StayError;

/// Gateway-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The backend could not be reached at all (connect failure, DNS,
    /// broken connection). Candidate for fallback handling.
    #[error("Backend unreachable: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("Backend rejected request with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Malformed response body: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Classify a `reqwest` error. Anything that happened before a
    /// well-formed HTTP response arrived counts as transport-level.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

impl From<GatewayError> for StayError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Rejected { status, message } => StayError::Request { status, message },
            GatewayError::Transport(reason) => StayError::ServiceUnavailable { reason },
            GatewayError::Decode(message) => StayError::Decode(message),
        }
    }
}
