use thiserror::Error;

use crate::models::{exchanger::ExchangerError, wall::WallError};

/// Result alias for boundary handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures produced at the request/response boundary.
///
/// Three kinds of failure reach a client, mirroring where they arise:
/// payloads that cannot be parsed, parameters outside their valid range,
/// and degenerate configurations reported by a calculator. Each maps to an
/// HTTP-equivalent status through [`ApiError::status`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The payload was not valid JSON for the endpoint's request shape.
    #[error("Invalid input type or data format: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A parameter was present and well-typed but outside its valid range.
    #[error("{0}")]
    InvalidParameter(String),

    /// The composite wall calculator reported a degenerate configuration.
    #[error(transparent)]
    Wall(#[from] WallError),

    /// The exchanger calculator reported a degenerate configuration.
    #[error(transparent)]
    Exchanger(#[from] ExchangerError),

    /// An unexpected failure with no client-correctable cause.
    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

impl ApiError {
    /// Shorthand for an [`ApiError::InvalidParameter`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// HTTP-equivalent status code for this failure.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Malformed(_)
            | Self::InvalidParameter(_)
            | Self::Wall(_)
            | Self::Exchanger(_) => 400,
            Self::Internal(_) => 500,
        }
    }
}
