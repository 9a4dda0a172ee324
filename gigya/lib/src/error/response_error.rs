//! Collapsed transport failure.

use thiserror::Error;

use super::TransportError;

/// The Gigya request failed before a response body was received.
///
/// Socket errors, refused connections and timeouts all end up here. Only the
/// rendered message of the underlying failure is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Gigya request failed: {message}")]
pub struct ResponseError {
    message: String,
}

impl ResponseError {
    /// Creates a response error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The rendered message of the underlying failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TransportError> for ResponseError {
    fn from(err: TransportError) -> Self {
        Self::new(err.to_string())
    }
}
