//! Errors reported by a [`Transport`](crate::Transport).

use thiserror::Error;

/// Errors from the HTTP transport layer.
///
/// These never reach callers of the client directly; the executor collapses
/// every variant into a [`ResponseError`](super::ResponseError).
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed due to a network or protocol error.
    ///
    /// The wrapped error must not carry the request URL.
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Request exceeded the timeout.
    #[error("Request timeout{}", duration_suffix(.duration_ms))]
    Timeout {
        /// The timeout duration in milliseconds, when known.
        duration_ms: Option<u64>,
    },

    /// Failed to establish a connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),
}

fn duration_suffix(duration_ms: &Option<u64>) -> String {
    duration_ms
        .map(|ms| format!(" after {ms}ms"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let err = TransportError::Timeout {
            duration_ms: Some(5000),
        };
        assert_eq!(err.to_string(), "Request timeout after 5000ms");

        let err = TransportError::Timeout { duration_ms: None };
        assert_eq!(err.to_string(), "Request timeout");
    }

    #[test]
    fn test_connection_display() {
        let err = TransportError::Connection("connection refused".to_string());
        assert_eq!(err.to_string(), "Connection failed: connection refused");
    }
}
