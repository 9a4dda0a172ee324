//! Gigya client module.
//!
//! [`GigyaClient`] is the single entry point. Its methods are spread over
//! three files:
//! - `executor` - construction, URL building, request execution and
//!   `errorCode` mapping
//! - `dispatch` - the name-based surface (`call`, `invoke`, `responds_to`)
//! - `methods` - named wrappers for common remote methods
//!
//! ## Examples
//!
//! ```rust,ignore
//! use gigya::{GigyaClient, GigyaConfig, Params};
//!
//! let client = GigyaClient::new(GigyaConfig::new("3_apikey", "secret"))?;
//!
//! // Equivalent calls
//! client.call("socialize_getUserInfo", Params::new().uid("_guid_1")).await?;
//! client.socialize("getUserInfo", Params::new().uid("_guid_1")).await?;
//! client.socialize_get_user_info(Params::new().uid("_guid_1")).await?;
//! ```

use std::fmt;
use std::sync::Arc;

use crate::config::GigyaConfig;
use crate::log_sink::LogSink;
use crate::transport::ReqwestTransport;

mod dispatch;
mod executor;
mod methods;

pub use dispatch::responds_to;
pub use executor::GigyaClientBuilder;
pub use methods::WRAPPED_METHODS;

/// Client for the Gigya REST APIs.
///
/// Every call issues exactly one GET request. There is no retry, caching or
/// rate limiting; the client holds only immutable configuration and can be
/// shared freely between tasks.
///
/// ## Examples
///
/// ```rust,ignore
/// use gigya::{GigyaClient, GigyaConfig, Outcome, Params};
///
/// let client = GigyaClient::new(GigyaConfig::new("3_apikey", "secret"))?;
///
/// match client.call("socialize_getUserInfo", Params::new().uid("_guid_1")).await? {
///     Outcome::Success(user) => println!("{}", user["nickname"]),
///     Outcome::LimitReached => println!("try again later"),
///     Outcome::NoResponse => println!("no response"),
/// }
/// ```
pub struct GigyaClient<T = ReqwestTransport> {
    config: GigyaConfig,
    transport: T,
    sink: Arc<dyn LogSink>,
}

impl<T> fmt::Debug for GigyaClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GigyaClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
