//! Request execution with tracing instrumentation.
//!
//! Construction of [`GigyaClient`] and the request path shared by every
//! call surface: build the URL, send it through the [`Transport`], map the
//! envelope to an [`Outcome`] or error.

use std::sync::Arc;

use tracing::{debug, instrument, warn, Span};
use url::Url;

use crate::config::GigyaConfig;
use crate::error::{ConfigError, GigyaError, RemoteError, ResponseError, ValidationError};
use crate::log_sink::{LogSink, StdoutSink};
use crate::operation::Operation;
use crate::params::Params;
use crate::response::{codes, Envelope, Outcome};
use crate::transport::{ReqwestTransport, Transport};
use crate::url_builder;

use super::GigyaClient;

/// Builder for a [`GigyaClient`] using the reqwest transport.
pub struct GigyaClientBuilder {
    config: GigyaConfig,
    sink: Arc<dyn LogSink>,
    http_client: Option<reqwest::Client>,
}

impl GigyaClientBuilder {
    fn new(config: GigyaConfig) -> Self {
        Self {
            config,
            sink: Arc::new(StdoutSink),
            http_client: None,
        }
    }

    /// Sets the log sink. Defaults to [`StdoutSink`].
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use gigya::{GigyaClient, TracingSink};
    ///
    /// let client = GigyaClient::builder(config).sink(TracingSink).build()?;
    /// ```
    pub fn sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Reuses an existing `reqwest::Client` instead of building one.
    ///
    /// The configured timeout is not applied to a supplied client, and its
    /// timeout errors report no duration.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`GigyaClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<GigyaClient, ConfigError> {
        let transport = match self.http_client {
            Some(client) => ReqwestTransport::with_client(client),
            None => ReqwestTransport::new(self.config.timeout())?,
        };

        Ok(GigyaClient {
            config: self.config,
            transport,
            sink: self.sink,
        })
    }
}

impl GigyaClient<ReqwestTransport> {
    /// Creates a builder for a client with the given configuration.
    pub fn builder(config: GigyaConfig) -> GigyaClientBuilder {
        GigyaClientBuilder::new(config)
    }

    /// Creates a client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: GigyaConfig) -> Result<Self, ConfigError> {
        Self::builder(config).build()
    }

    /// Creates a client from the process-wide configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the environment lacks credentials or the HTTP
    /// client cannot be constructed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(GigyaConfig::global()?.clone())
    }
}

impl<T: Transport> GigyaClient<T> {
    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(config: GigyaConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            sink: Arc::new(StdoutSink),
        }
    }

    /// Replaces the log sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// The client configuration.
    pub fn config(&self) -> &GigyaConfig {
        &self.config
    }

    /// Form-URL-encoded authentication parameters for this client.
    pub fn required_parameters(&self) -> String {
        url_builder::required_parameters(&self.config)
    }

    /// Builds the request URL for `operation`.
    ///
    /// ## Errors
    ///
    /// Returns a [`ParamError`](crate::ParamError) if `UID` or `siteUID` is nil.
    pub fn build_url(&self, operation: &Operation, params: &Params) -> Result<Url, GigyaError> {
        url_builder::build_url(&self.config, operation, params)
    }

    /// Writes a message to the configured log sink.
    pub fn log(&self, message: &str) {
        self.sink.info(message);
    }

    /// Executes `operation` and interprets the response.
    ///
    /// ## Errors
    ///
    /// - [`ParamError`](crate::ParamError) for nil user identifiers
    /// - [`ResponseError`] for any transport failure
    /// - [`ValidationError::JsonParse`] for a malformed body
    /// - [`RemoteError`] for a non-zero `errorCode` other than `400124`
    #[instrument(
        name = "gigya_request",
        skip(self, operation, params),
        fields(
            gigya.operation = %operation,
            gigya.namespace = %operation.namespace(),
            http.host = tracing::field::Empty,
            gigya.error_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn parse_results(
        &self,
        operation: &Operation,
        params: &Params,
    ) -> Result<Outcome, GigyaError> {
        let url = self.build_url(operation, params)?;

        // The query carries the secret, so only the host is recorded.
        if let Some(host) = url.host_str() {
            Span::current().record("http.host", host);
        }

        let body = match self.transport.get(&url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Gigya request failed");
                Span::current().record("otel.status_code", "ERROR");
                return Err(ResponseError::from(e).into());
            }
        };

        let Some(body) = body else {
            debug!("Transport returned no response");
            return Ok(Outcome::NoResponse);
        };

        let envelope: Envelope = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Gigya returned malformed JSON");
            Span::current().record("otel.status_code", "ERROR");
            ValidationError::JsonParse(e)
        })?;

        Span::current().record("gigya.error_code", envelope.error_code());

        let outcome = match self.check_for_errors(envelope) {
            Ok(Some(envelope)) => Outcome::Success(envelope),
            Ok(None) => Outcome::LimitReached,
            Err(e) => {
                Span::current().record("otel.status_code", "ERROR");
                return Err(e);
            }
        };

        Span::current().record("otel.status_code", "OK");
        debug!(success = outcome.is_success(), "Gigya call completed");
        Ok(outcome)
    }

    /// Maps an envelope's `errorCode` to a result.
    ///
    /// | `errorCode` | Result |
    /// |---|---|
    /// | `0` | `Ok(Some(envelope))` |
    /// | `400124` | `Ok(None)` |
    /// | `400002` | [`RemoteError::BadParamsOrMethodName`] |
    /// | anything else | envelope written to the log sink, then [`RemoteError::ErrorCodeReturned`] |
    ///
    /// ## Errors
    ///
    /// Returns a [`RemoteError`] for every code except `0` and `400124`.
    pub fn check_for_errors(&self, envelope: Envelope) -> Result<Option<Envelope>, GigyaError> {
        match envelope.error_code() {
            codes::SUCCESS => Ok(Some(envelope)),
            codes::LIMIT_REACHED => {
                debug!(gigya.error_code = codes::LIMIT_REACHED, "Gigya limit reached");
                Ok(None)
            }
            codes::BAD_PARAMS_OR_METHOD_NAME => Err(RemoteError::BadParamsOrMethodName {
                message: envelope.error_message().map(str::to_string),
            }
            .into()),
            code => {
                self.log(&envelope.to_string());
                Err(RemoteError::ErrorCodeReturned {
                    code,
                    message: envelope.error_message().map(str::to_string),
                }
                .into())
            }
        }
    }
}
