//! Namespace-qualified remote operations.

use std::fmt;
use std::str::FromStr;

use crate::error::DispatchError;
use crate::namespace::Namespace;

/// A remote Gigya method, e.g. `socialize.getUserInfo`.
///
/// Operations can only be constructed with a supported [`Namespace`] and a
/// non-empty method, so everything downstream of dispatch can rely on both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operation {
    namespace: Namespace,
    method: String,
}

impl Operation {
    /// Creates an operation from its parts.
    ///
    /// ## Errors
    ///
    /// Returns [`DispatchError::EmptyMethod`] if `method` is empty.
    pub fn new(namespace: Namespace, method: impl Into<String>) -> Result<Self, DispatchError> {
        let method = method.into();
        if method.is_empty() {
            return Err(DispatchError::empty_method(format!("{namespace}.")));
        }
        Ok(Self { namespace, method })
    }

    /// Resolves a call name such as `socialize_getUserInfo`.
    ///
    /// Only the first underscore separates namespace from method, so
    /// `gm_get_top_users` becomes `gm.get_top_users`.
    ///
    /// ## Errors
    ///
    /// - [`DispatchError::NoSuchMethod`] if the prefix is not a namespace
    /// - [`DispatchError::EmptyMethod`] if nothing follows the underscore
    pub fn from_call_name(name: &str) -> Result<Self, DispatchError> {
        Self::split(name, '_')
    }

    /// The API family of this operation.
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// The method part, without namespace.
    pub fn method(&self) -> &str {
        &self.method
    }

    fn split(name: &str, separator: char) -> Result<Self, DispatchError> {
        let (prefix, method) = name
            .split_once(separator)
            .ok_or_else(|| DispatchError::no_such_method(name))?;
        let namespace =
            Namespace::from_str(prefix).map_err(|_| DispatchError::no_such_method(name))?;
        if method.is_empty() {
            return Err(DispatchError::empty_method(name));
        }
        Ok(Self {
            namespace,
            method: method.to_string(),
        })
    }
}

impl FromStr for Operation {
    type Err = DispatchError;

    /// Parses the dotted form, e.g. `comments.getTopStreams`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::split(s, '.')
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_name_rewrites_first_underscore() {
        let op = Operation::from_call_name("socialize_getUserInfo").unwrap();
        assert_eq!(op.namespace(), Namespace::Socialize);
        assert_eq!(op.method(), "getUserInfo");
        assert_eq!(op.to_string(), "socialize.getUserInfo");

        let op = Operation::from_call_name("gm_get_top_users").unwrap();
        assert_eq!(op.to_string(), "gm.get_top_users");
    }

    #[test]
    fn test_unknown_prefix_is_no_such_method() {
        for name in ["abc", "abc_def", "accounts_getAccountInfo", "Socialize_x", ""] {
            assert_eq!(
                Operation::from_call_name(name),
                Err(DispatchError::NoSuchMethod {
                    name: name.to_string()
                }),
                "{name}"
            );
        }
    }

    #[test]
    fn test_empty_method() {
        assert!(matches!(
            Operation::from_call_name("comments_"),
            Err(DispatchError::EmptyMethod { .. })
        ));
        assert!(matches!(
            Operation::new(Namespace::Gm, ""),
            Err(DispatchError::EmptyMethod { .. })
        ));
    }

    #[test]
    fn test_parse_dotted_form() {
        let op: Operation = "comments.getTopStreams".parse().unwrap();
        assert_eq!(op.namespace(), Namespace::Comments);
        assert_eq!(op.method(), "getTopStreams");

        assert!("socialize_getUserInfo".parse::<Operation>().is_err());
        assert!("abc.def".parse::<Operation>().is_err());
    }
}
