//! Response handling module.
//!
//! Every Gigya response is a JSON [`Envelope`] carrying an `errorCode`. The
//! client turns an envelope into an [`Outcome`] or a
//! [`RemoteError`](crate::RemoteError) depending on that code.

mod envelope;
mod outcome;

pub use envelope::Envelope;
pub use outcome::Outcome;

/// `errorCode` values with dedicated handling.
pub mod codes {
    /// The call succeeded.
    pub const SUCCESS: i64 = 0;

    /// Invalid parameter or unknown method name.
    pub const BAD_PARAMS_OR_METHOD_NAME: i64 = 400002;

    /// A limit was reached. Reported as [`Outcome::LimitReached`](super::Outcome::LimitReached)
    /// rather than an error.
    pub const LIMIT_REACHED: i64 = 400124;
}
