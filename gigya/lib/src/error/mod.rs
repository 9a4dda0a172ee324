//! Layered error types for the Gigya client.
//!
//! The error hierarchy follows the order in which a call can fail:
//! - [`ParamError`] - Caller parameters rejected before any I/O
//! - [`DispatchError`] - Call names outside the supported namespaces
//! - [`ResponseError`] - Any transport failure, collapsed into one kind
//! - [`ValidationError`] - Response bodies that are not valid JSON envelopes
//! - [`RemoteError`] - Non-zero `errorCode` values reported by Gigya
//! - [`ConfigError`] - Credentials, domain and HTTP client setup
//!
//! [`GigyaError`] aggregates all of them.

mod config_error;
mod dispatch_error;
mod gigya_error;
mod param_error;
mod remote_error;
mod response_error;
mod transport_error;
mod validation_error;

pub use config_error::ConfigError;
pub use dispatch_error::DispatchError;
pub use gigya_error::GigyaError;
pub use param_error::ParamError;
pub use remote_error::RemoteError;
pub use response_error::ResponseError;
pub use transport_error::TransportError;
pub use validation_error::ValidationError;
