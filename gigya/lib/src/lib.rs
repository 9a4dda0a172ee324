//! Client for the Gigya social identity REST APIs.
//!
//! The crate turns method-style calls into authenticated GET requests
//! against the three Gigya API families and maps Gigya's `errorCode` values
//! to typed results.
//!
//! ## Features
//!
//! - **Three namespaces**: `socialize`, `gm` (game mechanics) and `comments`,
//!   each routed to its own host
//! - **Open call surface**: any `<namespace>_<method>` name can be called
//!   without a dedicated wrapper
//! - **Typed outcomes**: success, limit reached and no response are values;
//!   everything else is a [`GigyaError`]
//! - **Pluggable transport and log sink** for tests and host applications
//!
//! ## Example
//!
//! ```rust,ignore
//! use gigya::{GigyaClient, GigyaConfig, Outcome, Params};
//!
//! let client = GigyaClient::new(GigyaConfig::from_env()?)?;
//!
//! let params = Params::new()
//!     .site_uid("1")
//!     .set_json("userInfo", &serde_json::json!({ "nickname": "Gigems" }))?;
//!
//! if let Outcome::Success(envelope) = client.call("socialize_notifyLogin", params).await? {
//!     println!("logged in as {}", envelope["UID"]);
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod log_sink;
pub mod namespace;
pub mod operation;
pub mod params;
pub mod response;
pub mod transport;
pub mod url_builder;

// Re-exports for convenience
pub use client::{responds_to, GigyaClient, GigyaClientBuilder};
pub use config::GigyaConfig;
pub use error::{
    ConfigError, DispatchError, GigyaError, ParamError, RemoteError, ResponseError,
    TransportError, ValidationError,
};
pub use log_sink::{LogSink, StdoutSink, TracingSink};
pub use namespace::Namespace;
pub use operation::Operation;
pub use params::{ParamValue, Params};
pub use response::{Envelope, Outcome};
pub use transport::{ReqwestTransport, Transport};
