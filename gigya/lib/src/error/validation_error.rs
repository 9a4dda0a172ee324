//! Response parsing errors.

use thiserror::Error;

/// Errors while turning a response body into an envelope.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The body is not a JSON object.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ValidationError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_))
    }
}
