//! Gigya API families.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// One of the three Gigya API families.
///
/// The namespace is the part of an operation name before the dot
/// (`socialize.getUserInfo`) and selects the host the request goes to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Namespace {
    /// Social login, user info and friends (`socialize-api` host).
    Socialize,
    /// Game mechanics (`gm` host).
    Gm,
    /// Comments and streams (`comments` host).
    Comments,
}

impl Namespace {
    /// The namespace as it appears in operation names.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// The first label of this namespace's host.
    pub fn host_prefix(self) -> &'static str {
        match self {
            Self::Socialize => "socialize-api",
            Self::Gm => "gm",
            Self::Comments => "comments",
        }
    }

    /// Base URL for this namespace under the given provider domain.
    ///
    /// ## Examples
    ///
    /// ```
    /// use gigya::Namespace;
    ///
    /// assert_eq!(
    ///     Namespace::Socialize.base_url("gigya.com"),
    ///     "https://socialize-api.gigya.com"
    /// );
    /// ```
    pub fn base_url(self, domain: &str) -> String {
        format!("https://{}.{domain}", self.host_prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_lowercase_names() {
        assert_eq!(Namespace::from_str("socialize"), Ok(Namespace::Socialize));
        assert_eq!(Namespace::from_str("gm"), Ok(Namespace::Gm));
        assert_eq!(Namespace::from_str("comments"), Ok(Namespace::Comments));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(Namespace::from_str("Socialize").is_err());
        assert!(Namespace::from_str("GM").is_err());
        assert!(Namespace::from_str("accounts").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for ns in Namespace::iter() {
            assert_eq!(Namespace::from_str(&ns.to_string()), Ok(ns));
            assert_eq!(ns.as_str(), ns.to_string());
        }
    }

    #[test]
    fn test_base_urls() {
        assert_eq!(
            Namespace::Gm.base_url("eu1.gigya.com"),
            "https://gm.eu1.gigya.com"
        );
        assert_eq!(
            Namespace::Comments.base_url("gigya.com"),
            "https://comments.gigya.com"
        );
    }
}
