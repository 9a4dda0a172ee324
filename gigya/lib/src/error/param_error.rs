//! Caller parameter errors.

use thiserror::Error;

/// Errors raised while validating request parameters.
///
/// Both checks run before the URL is built, so no request is ever sent with
/// a nil user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The `UID` parameter was supplied but is nil or empty.
    #[error("UID parameter is nil")]
    UidIsNil,

    /// The `siteUID` parameter was supplied but is nil or empty.
    #[error("siteUID parameter is nil")]
    SiteUidIsNil,
}
