//! HTTP transport used by the client.
//!
//! The [`Transport`] trait is the seam between request dispatch and the
//! network. [`ReqwestTransport`] is the production implementation; tests can
//! substitute anything that returns a body, no body, or a [`TransportError`].

use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::ACCEPT;
use tracing::debug;
use url::Url;

use crate::error::{ConfigError, TransportError};

/// Performs a single HTTP GET.
pub trait Transport: Send + Sync {
    /// Fetches `url`.
    ///
    /// Returns `Ok(None)` when the server produced no body.
    fn get(&self, url: &Url) -> impl Future<Output = Result<Option<Bytes>, TransportError>> + Send;
}

/// [`Transport`] backed by `reqwest` with rustls.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// Creates a transport whose requests time out after `timeout`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            timeout: Some(timeout),
        })
    }

    /// Wraps an existing `reqwest::Client`.
    ///
    /// The client's own timeout settings apply, so timeout errors carry no
    /// duration.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    /// Maps a reqwest error, dropping the request URL since its query
    /// carries the API secret.
    fn classify(&self, err: reqwest::Error) -> TransportError {
        let err = err.without_url();
        if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: self
                    .timeout
                    .map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
            }
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Request(err)
        }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<Option<Bytes>, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status().as_u16();
        debug!(http.status_code = status, "Received Gigya response");

        // Gigya reports failures in the body, so the status code is not checked.
        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(body))
    }
}
