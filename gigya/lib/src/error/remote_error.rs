//! Errors reported by Gigya through the envelope's `errorCode`.

use thiserror::Error;

use crate::response::codes;

/// A non-zero `errorCode` that the client does not swallow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Gigya rejected the parameters or does not know the method (`400002`).
    #[error("Bad parameters or method name{}", message_suffix(.message))]
    BadParamsOrMethodName {
        /// `errorMessage` from the envelope, if any.
        message: Option<String>,
    },

    /// Any other non-zero error code.
    #[error("Gigya returned error code {code}{}", message_suffix(.message))]
    ErrorCodeReturned {
        /// The `errorCode` from the envelope.
        code: i64,
        /// `errorMessage` from the envelope, if any.
        message: Option<String>,
    },
}

impl RemoteError {
    /// The Gigya `errorCode` behind this error.
    pub fn error_code(&self) -> i64 {
        match self {
            Self::BadParamsOrMethodName { .. } => codes::BAD_PARAMS_OR_METHOD_NAME,
            Self::ErrorCodeReturned { code, .. } => *code,
        }
    }

    /// The `errorMessage` Gigya sent along with the code.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::BadParamsOrMethodName { message } | Self::ErrorCodeReturned { message, .. } => {
                message.as_deref()
            }
        }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_params_code() {
        let err = RemoteError::BadParamsOrMethodName { message: None };
        assert_eq!(err.error_code(), 400002);
        assert_eq!(err.to_string(), "Bad parameters or method name");
    }

    #[test]
    fn test_error_code_returned_display() {
        let err = RemoteError::ErrorCodeReturned {
            code: 403047,
            message: Some("Invalid UID".to_string()),
        };
        assert_eq!(err.error_code(), 403047);
        assert_eq!(err.message(), Some("Invalid UID"));
        assert_eq!(err.to_string(), "Gigya returned error code 403047: Invalid UID");
    }
}
