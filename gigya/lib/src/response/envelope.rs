//! The JSON object Gigya returns from every method.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::codes;

const STATUS_CODE: &str = "statusCode";
const ERROR_MESSAGE: &str = "errorMessage";
const ERROR_DETAILS: &str = "errorDetails";
const CALL_ID: &str = "callId";

/// A Gigya response envelope.
///
/// Only `errorCode` is typed. Every other field, including the shared
/// status fields, is kept as raw JSON and reachable through
/// [`get`](Self::get) or indexing; the status accessors return `None` when
/// a field is missing or has an unexpected JSON type.
///
/// A missing `errorCode` is read as `0`.
///
/// ## Examples
///
/// ```
/// use gigya::Envelope;
///
/// let envelope: Envelope =
///     serde_json::from_str(r#"{"errorCode":0,"nickname":"Gigems"}"#).unwrap();
///
/// assert!(envelope.is_success());
/// assert_eq!(envelope["nickname"], "Gigems");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "errorCode", default)]
    error_code: i64,

    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Envelope {
    /// Creates an envelope with the given error code and no other fields.
    pub fn with_code(error_code: i64) -> Self {
        Self {
            error_code,
            ..Self::default()
        }
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Sets `errorMessage`.
    #[must_use]
    pub fn with_error_message(self, message: impl Into<String>) -> Self {
        self.with_field(ERROR_MESSAGE, message.into())
    }

    /// The `errorCode` field.
    pub fn error_code(&self) -> i64 {
        self.error_code
    }

    /// Returns `true` if `errorCode` is `0`.
    pub fn is_success(&self) -> bool {
        self.error_code == codes::SUCCESS
    }

    /// The HTTP-like `statusCode` field.
    pub fn status_code(&self) -> Option<i64> {
        self.get(STATUS_CODE).and_then(Value::as_i64)
    }

    /// The `errorMessage` field.
    pub fn error_message(&self) -> Option<&str> {
        self.str_field(ERROR_MESSAGE)
    }

    /// The `errorDetails` field, when it is a string.
    pub fn error_details(&self) -> Option<&str> {
        self.str_field(ERROR_DETAILS)
    }

    /// The `callId` field, useful when reporting issues to Gigya.
    pub fn call_id(&self) -> Option<&str> {
        self.str_field(CALL_ID)
    }

    /// Any field other than `errorCode`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields other than `errorCode`.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Converts the envelope back into a JSON value.
    pub fn into_value(self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Index<&str> for Envelope {
    type Output = Value;

    /// Returns [`Value::Null`] for missing fields, like `serde_json::Value`.
    fn index(&self, key: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.fields.get(key).unwrap_or(&NULL)
    }
}

/// Renders the envelope as compact JSON.
impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
