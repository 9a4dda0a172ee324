//! Top-level Gigya error type.

use super::{
    ConfigError, DispatchError, ParamError, RemoteError, ResponseError, ValidationError,
};
use thiserror::Error;

/// Top-level error type for all Gigya operations.
///
/// Each variant wraps one error category so callers can either propagate a
/// single type with `?` or match on the category they care about.
///
/// ## Examples
///
/// ```rust,ignore
/// use gigya::{GigyaError, RemoteError};
///
/// match client.call("socialize_getUserInfo", params).await {
///     Ok(outcome) => println!("{outcome:?}"),
///     Err(GigyaError::Remote(RemoteError::BadParamsOrMethodName { .. })) => {
///         eprintln!("check the method name");
///     }
///     Err(e) if e.is_caller_error() => eprintln!("bad call: {e}"),
///     Err(e) => eprintln!("Gigya call failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum GigyaError {
    /// Required parameters were present but nil.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// The call name does not resolve to a supported namespace.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// The HTTP request failed before a body was received.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The response body could not be parsed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Gigya answered with a non-zero `errorCode`.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Client configuration is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GigyaError {
    /// Returns `true` if the error was caused by the caller's input and was
    /// raised before any network activity.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::Param(_) | Self::Dispatch(_))
    }

    /// Returns `true` if Gigya itself reported the failure.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Returns the Gigya `errorCode` for remote errors.
    pub fn remote_error_code(&self) -> Option<i64> {
        match self {
            Self::Remote(e) => Some(e.error_code()),
            _ => None,
        }
    }
}
