//! Call name resolution errors.

use thiserror::Error;

/// Errors resolving a call name into an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The name's prefix is not `socialize`, `gm` or `comments`.
    #[error("undefined method `{name}`")]
    NoSuchMethod {
        /// The call name as supplied.
        name: String,
    },

    /// The namespace is supported but the method part is empty.
    #[error("missing method name in `{name}`")]
    EmptyMethod {
        /// The call name as supplied.
        name: String,
    },
}

impl DispatchError {
    pub(crate) fn no_such_method(name: impl Into<String>) -> Self {
        Self::NoSuchMethod { name: name.into() }
    }

    pub(crate) fn empty_method(name: impl Into<String>) -> Self {
        Self::EmptyMethod { name: name.into() }
    }
}
