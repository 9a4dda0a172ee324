//! Request parameters.
//!
//! Gigya methods take flat string parameters. Two of them identify users and
//! must never be sent nil: `UID` and `siteUID`. They are modelled as named
//! fields; every other key passes through untouched, in insertion order.
//!
//! Keys are matched against the named fields ignoring ASCII case, so `uid`,
//! `Uid` and `UID` all set the same field, which is always sent as `UID`.
//! Likewise any casing of `siteuid` is sent as `siteUID`.

use serde::Serialize;
use url::form_urlencoded;

use crate::error::ParamError;

/// Wire name of the user identifier parameter.
pub const UID_KEY: &str = "UID";

/// Wire name of the site user identifier parameter.
pub const SITE_UID_KEY: &str = "siteUID";

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Explicitly nil.
    Null,
    /// A string value, sent URL-encoded.
    Value(String),
}

impl ParamValue {
    /// Returns `true` for [`ParamValue::Null`] and for empty strings.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Value(v) => v.is_empty(),
        }
    }

    /// The string value, if not nil.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Null => None,
            Self::Value(v) => Some(v),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<Option<String>> for ParamValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl From<Option<&str>> for ParamValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Null, |v| Self::Value(v.to_string()))
    }
}

/// Parameters for one Gigya call.
///
/// ## Examples
///
/// ```
/// use gigya::Params;
///
/// let params = Params::new()
///     .uid("_guid_abc")
///     .set("fields", "nickname,email");
///
/// assert_eq!(params.to_query(), "UID=_guid_abc&fields=nickname%2Cemail");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    uid: Option<ParamValue>,
    site_uid: Option<ParamValue>,
    extra: Vec<(String, ParamValue)>,
}

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `UID` parameter.
    #[must_use]
    pub fn uid(mut self, value: impl Into<ParamValue>) -> Self {
        self.uid = Some(value.into());
        self
    }

    /// Sets the `siteUID` parameter.
    #[must_use]
    pub fn site_uid(mut self, value: impl Into<ParamValue>) -> Self {
        self.site_uid = Some(value.into());
        self
    }

    /// Sets a parameter, replacing any earlier value for the same key.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a parameter to nil.
    #[must_use]
    pub fn set_null(self, key: impl Into<String>) -> Self {
        self.set(key, ParamValue::Null)
    }

    /// Sets a parameter to the JSON serialization of `value`.
    ///
    /// Gigya expects structured arguments such as `userInfo` as JSON strings.
    ///
    /// ## Errors
    ///
    /// Returns an error if `value` cannot be serialized.
    pub fn set_json<T: Serialize + ?Sized>(
        self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        let json = serde_json::to_string(value)?;
        Ok(self.set(key, json))
    }

    /// Inserts a parameter in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();

        if key.eq_ignore_ascii_case(UID_KEY) {
            self.uid = Some(value);
        } else if key.eq_ignore_ascii_case(SITE_UID_KEY) {
            self.site_uid = Some(value);
        } else if let Some(slot) = self.extra.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.extra.push((key, value));
        }
    }

    /// Looks up a parameter by key, using the same case folding as
    /// [`insert`](Self::insert).
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        if key.eq_ignore_ascii_case(UID_KEY) {
            self.uid.as_ref()
        } else if key.eq_ignore_ascii_case(SITE_UID_KEY) {
            self.site_uid.as_ref()
        } else {
            self.extra.iter().find(|(k, _)| k == key).map(|(_, v)| v)
        }
    }

    /// Number of parameters present.
    pub fn len(&self) -> usize {
        usize::from(self.uid.is_some()) + usize::from(self.site_uid.is_some()) + self.extra.len()
    }

    /// Returns `true` if no parameters are present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates parameters in wire order: `UID`, `siteUID`, then the rest in
    /// insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        let uid = self.uid.as_ref().map(|v| (UID_KEY, v));
        let site_uid = self.site_uid.as_ref().map(|v| (SITE_UID_KEY, v));
        uid.into_iter()
            .chain(site_uid)
            .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Checks that user identifiers, when present, are not nil.
    ///
    /// ## Errors
    ///
    /// - [`ParamError::UidIsNil`] if `UID` is present and nil or empty
    /// - [`ParamError::SiteUidIsNil`] if `siteUID` is present and nil or empty
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.uid.as_ref().is_some_and(ParamValue::is_blank) {
            return Err(ParamError::UidIsNil);
        }
        if self.site_uid.as_ref().is_some_and(ParamValue::is_blank) {
            return Err(ParamError::SiteUidIsNil);
        }
        Ok(())
    }

    /// Form-URL-encodes the parameters. Nil values render as `key=`.
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.iter() {
            query.append_pair(key, value.as_str().unwrap_or_default());
        }
        query.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
