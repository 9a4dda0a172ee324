//! Credentials and endpoint configuration.
//!
//! Configuration is either built explicitly or read from the environment:
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `GIGYA_API_KEY` | yes | |
//! | `GIGYA_API_SECRET` | yes | |
//! | `GIGYA_DOMAIN` | no | `gigya.com` |
//! | `GIGYA_TIMEOUT_SECS` | no | `30` |
//!
//! [`GigyaConfig::global`] reads the environment once per process and hands
//! out the same immutable value afterwards.

use std::env;
use std::fmt;
use std::time::Duration;

use once_cell::sync::OnceCell;
use tracing::info;
use url::Url;

use crate::error::ConfigError;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GIGYA_API_KEY";

/// Environment variable holding the API secret.
pub const API_SECRET_ENV: &str = "GIGYA_API_SECRET";

/// Environment variable overriding the provider domain.
pub const DOMAIN_ENV: &str = "GIGYA_DOMAIN";

/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "GIGYA_TIMEOUT_SECS";

/// Provider domain used when none is configured.
pub const DEFAULT_DOMAIN: &str = "gigya.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

static GLOBAL: OnceCell<GigyaConfig> = OnceCell::new();

/// Gigya client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct GigyaConfig {
    api_key: String,
    secret: String,
    domain: String,
    timeout: Duration,
    endpoint_override: Option<Url>,
}

impl GigyaConfig {
    /// Creates a configuration for the default `gigya.com` data center.
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
            domain: DEFAULT_DOMAIN.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            endpoint_override: None,
        }
    }

    /// Sets the provider domain, e.g. `eu1.gigya.com`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidDomain`] unless `domain` is a bare host
    /// name that can follow a namespace label.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into();
        if !is_valid_domain(&domain) {
            return Err(ConfigError::InvalidDomain { domain });
        }
        self.domain = domain;
        Ok(self)
    }

    /// Sets the HTTP request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends every namespace to `endpoint` instead of the Gigya hosts.
    ///
    /// Useful for tests and for routing through a proxy.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint_override = Some(endpoint);
        self
    }

    /// Reads configuration from the process environment.
    ///
    /// ## Errors
    ///
    /// Returns an error if a required variable is missing or an optional one
    /// is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// ## Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::missing_env(var))
        };

        let mut config = Self::new(required(API_KEY_ENV)?, required(API_SECRET_ENV)?);

        if let Some(domain) = lookup(DOMAIN_ENV).filter(|v| !v.is_empty()) {
            config = config.with_domain(domain)?;
        }
        if let Some(value) = lookup(TIMEOUT_ENV).filter(|v| !v.is_empty()) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout { value })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Returns the process-wide configuration, reading the environment on
    /// first use.
    ///
    /// A failed read is not cached; the next call tries again.
    ///
    /// ## Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn global() -> Result<&'static Self, ConfigError> {
        GLOBAL.get_or_try_init(|| {
            let config = Self::from_env()?;
            info!(gigya.domain = %config.domain, "Gigya configuration loaded");
            Ok(config)
        })
    }

    /// The API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The shared secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// The provider domain.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The HTTP request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The endpoint that replaces the Gigya hosts, if any.
    pub fn endpoint_override(&self) -> Option<&Url> {
        self.endpoint_override.as_ref()
    }
}

impl fmt::Debug for GigyaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GigyaConfig")
            .field("api_key", &self.api_key)
            .field("secret", &"<redacted>")
            .field("domain", &self.domain)
            .field("timeout", &self.timeout)
            .field("endpoint_override", &self.endpoint_override)
            .finish()
    }
}

fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GigyaConfig::new("key", "secret");
        assert_eq!(config.domain(), "gigya.com");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.endpoint_override().is_none());
    }

    #[test]
    fn test_with_domain_accepts_data_centers() {
        let config = GigyaConfig::new("k", "s").with_domain("eu1.gigya.com").unwrap();
        assert_eq!(config.domain(), "eu1.gigya.com");
    }

    #[test]
    fn test_with_domain_rejects_urls() {
        for domain in ["", "https://gigya.com", "gigya.com/", ".gigya.com", "gigya com"] {
            assert!(
                matches!(
                    GigyaConfig::new("k", "s").with_domain(domain),
                    Err(ConfigError::InvalidDomain { .. })
                ),
                "{domain}"
            );
        }
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = GigyaConfig::from_lookup(lookup(&[
            (API_KEY_ENV, "3_abc"),
            (API_SECRET_ENV, "s3cr3t"),
            (DOMAIN_ENV, "us1.gigya.com"),
            (TIMEOUT_ENV, "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_key(), "3_abc");
        assert_eq!(config.secret(), "s3cr3t");
        assert_eq!(config.domain(), "us1.gigya.com");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_from_lookup_missing_key() {
        let err = GigyaConfig::from_lookup(lookup(&[(API_SECRET_ENV, "s")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv { var } if var == API_KEY_ENV));
    }

    #[test]
    fn test_from_lookup_empty_secret_is_missing() {
        let err = GigyaConfig::from_lookup(lookup(&[(API_KEY_ENV, "k"), (API_SECRET_ENV, "")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv { var } if var == API_SECRET_ENV));
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let err = GigyaConfig::from_lookup(lookup(&[
            (API_KEY_ENV, "k"),
            (API_SECRET_ENV, "s"),
            (TIMEOUT_ENV, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = GigyaConfig::new("key", "hunter2");
        let debug = format!("{config:?}");
        assert!(debug.contains("key"));
        assert!(!debug.contains("hunter2"));
    }
}
