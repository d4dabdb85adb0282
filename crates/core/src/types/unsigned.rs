//! The `UnsignedInt64` scalar.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::scalar::{Scalar, ScalarError};

/// An unsigned 64-bit integer, serialized as a string.
///
/// Values above 2^53 cannot be represented exactly as JSON numbers, so the
/// wire form is a decimal string (`"18446744073709551615"`). Non-negative
/// integer JSON numbers are accepted as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UnsignedInt64(u64);

impl UnsignedInt64 {
    /// Create a new value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying `u64` value.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Parse a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not ASCII digits only, or does not
    /// fit in 64 bits.
    pub fn parse(s: &str) -> Result<Self, ScalarError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ScalarError::invalid(Self::NAME, s, "must contain only digits"));
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|e| ScalarError::invalid(Self::NAME, s, e))
    }
}

impl Scalar for UnsignedInt64 {
    const NAME: &'static str = "UnsignedInt64";

    fn parse_value(value: &Value) -> Result<Self, ScalarError> {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(n) => n.as_u64().map(Self).ok_or_else(|| {
                ScalarError::invalid(Self::NAME, &n.to_string(), "not a non-negative integer")
            }),
            other => Err(ScalarError::unexpected(Self::NAME, other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_string())
    }
}

impl fmt::Display for UnsignedInt64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UnsignedInt64 {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for UnsignedInt64 {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UnsignedInt64> for u64 {
    fn from(value: UnsignedInt64) -> Self {
        value.0
    }
}

impl Serialize for UnsignedInt64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UnsignedInt64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        <Self as Scalar>::parse_value(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_max() {
        let value = UnsignedInt64::parse("18446744073709551615").unwrap();
        assert_eq!(value.as_u64(), u64::MAX);
    }

    #[test]
    fn test_parse_negative_fails() {
        assert!(UnsignedInt64::parse("-1").is_err());
        assert!(UnsignedInt64::parse_value(&json!(-1)).is_err());
    }

    #[test]
    fn test_parse_digits_only() {
        for input in ["+5", " 5", "5 ", " +5 ", "", "5_000", "1e3"] {
            let err = UnsignedInt64::parse(input).unwrap_err();
            assert!(matches!(err, ScalarError::Invalid { .. }), "{input:?}");
        }
        assert!(UnsignedInt64::parse_value(&json!(" +5 ")).is_err());
        assert!(UnsignedInt64::parse("18446744073709551616").is_err());
        assert_eq!(UnsignedInt64::parse("007").unwrap().as_u64(), 7);
    }

    #[test]
    fn test_parse_value_number() {
        assert_eq!(UnsignedInt64::parse_value(&json!(42)).unwrap().as_u64(), 42);
        assert!(UnsignedInt64::parse_value(&json!(4.2)).is_err());
    }

    #[test]
    fn test_parse_literal_int() {
        assert_eq!(UnsignedInt64::parse_literal("7").unwrap().as_u64(), 7);
    }

    #[test]
    fn test_serializes_as_string() {
        let value = UnsignedInt64::new(1234);
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"1234\"");
        let back: UnsignedInt64 = serde_json::from_str("\"1234\"").unwrap();
        assert_eq!(back, value);
    }
}
