//! Request URL construction.
//!
//! A request URL looks like
//! `https://socialize-api.gigya.com/socialize.getUserInfo?apiKey=..&secret=..&format=json&UID=..`.
//! Authentication parameters always come first in the query.

use url::form_urlencoded;
use url::Url;

use crate::config::GigyaConfig;
use crate::error::{ConfigError, GigyaError};
use crate::operation::Operation;
use crate::params::Params;

/// Response format requested from Gigya.
pub const RESPONSE_FORMAT: &str = "json";

/// Form-URL-encoded `apiKey=..&secret=..&format=json` for `config`.
pub fn required_parameters(config: &GigyaConfig) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("apiKey", config.api_key())
        .append_pair("secret", config.secret())
        .append_pair("format", RESPONSE_FORMAT)
        .finish()
}

/// Builds the URL for `operation` with `params`.
///
/// ## Errors
///
/// - [`ParamError`](crate::ParamError) if `UID` or `siteUID` is nil
/// - [`ConfigError::InvalidUrl`] if the configured endpoint produces an
///   unparsable URL
pub fn build_url(
    config: &GigyaConfig,
    operation: &Operation,
    params: &Params,
) -> Result<Url, GigyaError> {
    params.validate()?;

    let base = match config.endpoint_override() {
        Some(endpoint) => endpoint.as_str().trim_end_matches('/').to_string(),
        None => operation.namespace().base_url(config.domain()),
    };

    let mut query = required_parameters(config);
    if !params.is_empty() {
        query.push('&');
        query.push_str(&params.to_query());
    }

    let url = Url::parse(&format!("{base}/{operation}?{query}")).map_err(ConfigError::from)?;
    Ok(url)
}
