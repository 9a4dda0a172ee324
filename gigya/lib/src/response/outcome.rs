//! The non-error results of a Gigya call.

use super::Envelope;

/// What a call produced when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// `errorCode` was `0`; the envelope is returned unchanged.
    Success(Envelope),
    /// `errorCode` was `400124`. Not an error: callers are expected to try
    /// again later.
    LimitReached,
    /// The transport produced no response body.
    NoResponse,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The envelope of a successful call.
    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            Self::Success(envelope) => Some(envelope),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the envelope of a successful call.
    pub fn into_envelope(self) -> Option<Envelope> {
        match self {
            Self::Success(envelope) => Some(envelope),
            _ => None,
        }
    }
}
