//! Name-based call surface.
//!
//! Gigya exposes far more methods than are worth wrapping by hand. Any
//! `<namespace>_<method>` name is accepted as long as the namespace is one of
//! `socialize`, `gm` or `comments`; the method itself is validated by Gigya.

use tracing::debug;

use super::GigyaClient;
use crate::error::GigyaError;
use crate::namespace::Namespace;
use crate::operation::Operation;
use crate::params::Params;
use crate::response::Outcome;
use crate::transport::Transport;

/// Returns `true` if [`GigyaClient::call`] accepts `name`.
///
/// Nothing is sent; only the namespace prefix and the presence of a method
/// part are checked.
///
/// ## Examples
///
/// ```
/// assert!(gigya::responds_to("socialize_getUserInfo"));
/// assert!(gigya::responds_to("gm_notifyAction"));
/// assert!(!gigya::responds_to("abc"));
/// ```
pub fn responds_to(name: &str) -> bool {
    Operation::from_call_name(name).is_ok()
}

impl<T: Transport> GigyaClient<T> {
    /// Calls a Gigya method by its call name, e.g. `socialize_getUserInfo`.
    ///
    /// The first underscore is rewritten to a dot to form the remote method
    /// name (`socialize.getUserInfo`).
    ///
    /// ## Errors
    ///
    /// Returns [`DispatchError::NoSuchMethod`](crate::DispatchError::NoSuchMethod)
    /// without sending anything if the prefix is not a supported namespace,
    /// otherwise any error of [`parse_results`](Self::parse_results).
    pub async fn call(&self, name: &str, params: Params) -> Result<Outcome, GigyaError> {
        let operation = Operation::from_call_name(name)?;
        debug!(call = name, gigya.operation = %operation, "Dispatching Gigya call");
        self.parse_results(&operation, &params).await
    }

    /// Calls `method` in `namespace`.
    ///
    /// ## Errors
    ///
    /// Returns [`DispatchError::EmptyMethod`](crate::DispatchError::EmptyMethod)
    /// for an empty method, otherwise any error of
    /// [`parse_results`](Self::parse_results).
    pub async fn invoke(
        &self,
        namespace: Namespace,
        method: &str,
        params: Params,
    ) -> Result<Outcome, GigyaError> {
        let operation = Operation::new(namespace, method)?;
        self.parse_results(&operation, &params).await
    }

    /// Calls a method of the `socialize` API.
    ///
    /// ## Errors
    ///
    /// See [`invoke`](Self::invoke).
    pub async fn socialize(&self, method: &str, params: Params) -> Result<Outcome, GigyaError> {
        self.invoke(Namespace::Socialize, method, params).await
    }

    /// Calls a method of the game mechanics (`gm`) API.
    ///
    /// ## Errors
    ///
    /// See [`invoke`](Self::invoke).
    pub async fn gm(&self, method: &str, params: Params) -> Result<Outcome, GigyaError> {
        self.invoke(Namespace::Gm, method, params).await
    }

    /// Calls a method of the `comments` API.
    ///
    /// ## Errors
    ///
    /// See [`invoke`](Self::invoke).
    pub async fn comments(&self, method: &str, params: Params) -> Result<Outcome, GigyaError> {
        self.invoke(Namespace::Comments, method, params).await
    }

    /// Returns `true` if [`call`](Self::call) accepts `name`.
    pub fn responds_to(&self, name: &str) -> bool {
        responds_to(name)
    }
}
