//! The `JSON` scalar.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::scalar::{Scalar, ScalarError};

/// An arbitrary JSON value, such as a filter's `input`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json(Value);

impl Json {
    /// Wrap a JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the `Json` and returns its inner value.
    #[must_use]
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Decode a JSON value that arrived as a string (e.g. `"{\"available\":true}"`).
    ///
    /// Shopify encodes some `JSON` fields, such as `FilterValue.input`, as
    /// JSON text. Values that are not strings are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::Invalid`] if the string is not valid JSON.
    pub fn decoded(&self) -> Result<Value, ScalarError> {
        match &self.0 {
            Value::String(text) => serde_json::from_str(text)
                .map_err(|e| ScalarError::invalid(Self::NAME, text, e)),
            other => Ok(other.clone()),
        }
    }
}

impl Scalar for Json {
    const NAME: &'static str = "JSON";

    fn parse_value(value: &Value) -> Result<Self, ScalarError> {
        Ok(Self(value.clone()))
    }

    fn to_value(&self) -> Value {
        self.0.clone()
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_accepts_any_value() {
        assert!(Json::parse_value(&json!(null)).is_ok());
        assert!(Json::parse_value(&json!({"a": [1, 2]})).is_ok());
    }

    #[test]
    fn test_decoded_string() {
        let input = Json::new(json!("{\"available\":true}"));
        assert_eq!(input.decoded().unwrap(), json!({"available": true}));
    }

    #[test]
    fn test_decoded_object_unchanged() {
        let input = Json::new(json!({"price": {"min": 10}}));
        assert_eq!(input.decoded().unwrap(), json!({"price": {"min": 10}}));
    }

    #[test]
    fn test_decoded_invalid_text() {
        let input = Json::new(json!("{not json"));
        assert!(input.decoded().is_err());
    }

    #[test]
    fn test_object_literal() {
        let input = Json::parse_literal("{available: true, tags: [\"new\", \"sale\"]}").unwrap();
        assert_eq!(input.as_value(), &json!({"available": true, "tags": ["new", "sale"]}));
    }
}
