//! The `DateTime` and `ISO8601DateTime` scalars.

use core::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, SecondsFormat, Utc};
use serde_json::Value;

use super::scalar::{Scalar, ScalarError, string_scalar_serde};

/// An ISO-8601 timestamp in UTC, such as `2019-09-07T15:50:00Z`.
///
/// Inputs with an offset are accepted and normalised to UTC.
///
/// ```
/// use storefront_schema_core::DateTime;
///
/// let at = DateTime::parse("2019-09-07T17:50:00+02:00").unwrap();
/// assert_eq!(at.to_string(), "2019-09-07T15:50:00Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(chrono::DateTime<Utc>);

impl DateTime {
    /// Parse an RFC 3339 timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid RFC 3339 timestamp.
    pub fn parse(s: &str) -> Result<Self, ScalarError> {
        chrono::DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| ScalarError::invalid(Self::NAME, s, e))
    }

    /// Wrap a `chrono` UTC timestamp.
    #[must_use]
    pub const fn new(inner: chrono::DateTime<Utc>) -> Self {
        Self(inner)
    }

    /// Returns the underlying `chrono` timestamp.
    #[must_use]
    pub const fn as_chrono(&self) -> &chrono::DateTime<Utc> {
        &self.0
    }
}

impl Scalar for DateTime {
    const NAME: &'static str = "DateTime";

    fn parse_value(value: &Value) -> Result<Self, ScalarError> {
        match value {
            Value::String(s) => Self::parse(s),
            other => Err(ScalarError::unexpected(Self::NAME, other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl FromStr for DateTime {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(inner: chrono::DateTime<Utc>) -> Self {
        Self(inner)
    }
}

string_scalar_serde!(DateTime);

/// An ISO-8601 timestamp that keeps its original UTC offset.
///
/// ```
/// use storefront_schema_core::Iso8601DateTime;
///
/// let at = Iso8601DateTime::parse("2024-02-01T09:30:00-05:00").unwrap();
/// assert_eq!(at.to_string(), "2024-02-01T09:30:00-05:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iso8601DateTime(chrono::DateTime<FixedOffset>);

impl Iso8601DateTime {
    /// Parse an RFC 3339 timestamp, keeping its offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid RFC 3339 timestamp.
    pub fn parse(s: &str) -> Result<Self, ScalarError> {
        chrono::DateTime::parse_from_rfc3339(s)
            .map(Self)
            .map_err(|e| ScalarError::invalid(Self::NAME, s, e))
    }

    /// Returns the underlying `chrono` timestamp.
    #[must_use]
    pub const fn as_chrono(&self) -> &chrono::DateTime<FixedOffset> {
        &self.0
    }

    /// Convert to a UTC [`DateTime`].
    #[must_use]
    pub fn to_utc(&self) -> DateTime {
        DateTime(self.0.with_timezone(&Utc))
    }
}

impl Scalar for Iso8601DateTime {
    const NAME: &'static str = "ISO8601DateTime";

    fn parse_value(value: &Value) -> Result<Self, ScalarError> {
        match value {
            Value::String(s) => Self::parse(s),
            other => Err(ScalarError::unexpected(Self::NAME, other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl fmt::Display for Iso8601DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, false))
    }
}

impl FromStr for Iso8601DateTime {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

string_scalar_serde!(Iso8601DateTime);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_parse_utc() {
        let at = DateTime::parse("2019-09-07T15:50:00Z").unwrap();
        assert_eq!(at.to_string(), "2019-09-07T15:50:00Z");
    }

    #[test]
    fn test_datetime_normalises_offset() {
        let at = DateTime::parse("2019-09-07T10:50:00-05:00").unwrap();
        assert_eq!(at.to_string(), "2019-09-07T15:50:00Z");
    }

    #[test]
    fn test_datetime_keeps_fractional_seconds() {
        let at = DateTime::parse("2019-09-07T15:50:00.123Z").unwrap();
        assert_eq!(at.to_string(), "2019-09-07T15:50:00.123Z");
    }

    #[test]
    fn test_datetime_rejects_date_only() {
        assert!(matches!(
            DateTime::parse("2019-09-07"),
            Err(ScalarError::Invalid { scalar: "DateTime", .. })
        ));
    }

    #[test]
    fn test_datetime_ordering() {
        let earlier = DateTime::parse("2019-09-07T15:50:00Z").unwrap();
        let later = DateTime::parse("2019-09-08T00:00:00Z").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_iso8601_keeps_offset() {
        let at = Iso8601DateTime::parse("2024-02-01T09:30:00-05:00").unwrap();
        assert_eq!(at.to_string(), "2024-02-01T09:30:00-05:00");
        assert_eq!(at.to_utc().to_string(), "2024-02-01T14:30:00Z");
    }

    #[test]
    fn test_parse_literal() {
        let at = DateTime::parse_literal("\"2019-09-07T15:50:00Z\"").unwrap();
        assert_eq!(at.to_value(), serde_json::json!("2019-09-07T15:50:00Z"));
        assert!(DateTime::parse_literal("2019-09-07T15:50:00Z").is_err());
    }

    #[test]
    fn test_serde() {
        let at: DateTime = serde_json::from_str("\"2019-09-07T15:50:00Z\"").unwrap();
        assert_eq!(
            serde_json::to_string(&at).unwrap(),
            "\"2019-09-07T15:50:00Z\""
        );
    }
}
