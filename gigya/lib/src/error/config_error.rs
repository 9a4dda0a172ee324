//! Client configuration errors.

use thiserror::Error;

/// Errors in Gigya client configuration.
///
/// These occur while the client is being set up, before any call is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("Missing environment variable: {var}")]
    MissingEnv {
        /// The name of the missing variable.
        var: &'static str,
    },

    /// The provider domain cannot be used as a host suffix.
    #[error("Invalid Gigya domain: {domain:?}")]
    InvalidDomain {
        /// The rejected domain.
        domain: String,
    },

    /// The timeout value is not a whole number of seconds.
    #[error("Invalid timeout: {value:?}")]
    InvalidTimeout {
        /// The rejected value.
        value: String,
    },

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ConfigError {
    /// Creates a missing environment variable error.
    pub fn missing_env(var: &'static str) -> Self {
        Self::MissingEnv { var }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env() {
        let err = ConfigError::missing_env("GIGYA_API_KEY");
        assert_eq!(err.to_string(), "Missing environment variable: GIGYA_API_KEY");
    }

    #[test]
    fn test_invalid_url() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err = ConfigError::InvalidUrl(url_err);
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_invalid_domain() {
        let err = ConfigError::InvalidDomain {
            domain: "https://gigya.com".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid Gigya domain: \"https://gigya.com\"");
    }
}
