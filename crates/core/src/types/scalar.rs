//! The codec contract shared by every custom scalar.

use async_graphql_parser::parse_query;
use async_graphql_parser::types::{DocumentOperations, Selection};
use async_graphql_value::ConstValue;
use serde_json::Value;

/// Errors that can occur when parsing a scalar value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScalarError {
    /// The JSON value has the wrong type for this scalar.
    #[error("{scalar} cannot represent a {found} value")]
    UnexpectedType {
        /// Schema name of the scalar.
        scalar: &'static str,
        /// JSON type that was received.
        found: &'static str,
    },
    /// The value has the right type but is malformed.
    #[error("invalid {scalar} value {input:?}: {reason}")]
    Invalid {
        /// Schema name of the scalar.
        scalar: &'static str,
        /// The rejected input.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },
    /// The GraphQL literal could not be read.
    #[error("invalid GraphQL literal for {scalar}: {literal}")]
    InvalidLiteral {
        /// Schema name of the scalar.
        scalar: &'static str,
        /// The literal source text.
        literal: String,
    },
}

impl ScalarError {
    pub(crate) fn invalid(scalar: &'static str, input: &str, reason: impl ToString) -> Self {
        Self::Invalid {
            scalar,
            input: input.to_owned(),
            reason: reason.to_string(),
        }
    }

    pub(crate) const fn unexpected(scalar: &'static str, value: &Value) -> Self {
        Self::UnexpectedType {
            scalar,
            found: json_type_name(value),
        }
    }
}

/// A custom GraphQL scalar with its wire-format rules.
///
/// This mirrors a GraphQL server's scalar configuration: values arriving as
/// variables go through [`Scalar::parse_value`], values written inline in a
/// document go through [`Scalar::parse_literal`], and results leave through
/// [`Scalar::to_value`].
///
/// # Example
///
/// ```
/// use storefront_schema_core::{Decimal, Scalar};
///
/// let price = Decimal::parse_value(&serde_json::json!("29.99")).unwrap();
/// assert_eq!(price.to_value(), serde_json::json!("29.99"));
/// ```
pub trait Scalar: Sized {
    /// Schema name of the scalar (e.g. `"Decimal"`).
    const NAME: &'static str;

    /// Parse a value received as a JSON variable.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError`] if the value has the wrong type or is malformed.
    fn parse_value(value: &Value) -> Result<Self, ScalarError>;

    /// Serialize the scalar to its wire form.
    fn to_value(&self) -> Value;

    /// Parse a value written as a GraphQL literal (e.g. `"29.99"`, `42` or
    /// `{available: true}`).
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::InvalidLiteral`] if the literal is not a valid
    /// GraphQL constant value, or any error from [`Scalar::parse_value`].
    fn parse_literal(literal: &str) -> Result<Self, ScalarError> {
        Self::parse_value(&literal_value(Self::NAME, literal)?)
    }
}

/// Read a GraphQL constant value into its JSON form.
///
/// Block strings are dedented and escapes are resolved as GraphQL requires.
/// Variables and enum values are rejected.
///
/// # Errors
///
/// Returns [`ScalarError::InvalidLiteral`] naming `scalar` if `literal` is not
/// exactly one GraphQL constant value.
///
/// # Example
///
/// ```
/// use storefront_schema_core::literal_value;
///
/// let value = literal_value("JSON", "{available: true, tags: [\"new\"]}").unwrap();
/// assert_eq!(value, serde_json::json!({ "available": true, "tags": ["new"] }));
/// ```
pub fn literal_value(scalar: &'static str, literal: &str) -> Result<Value, ScalarError> {
    let invalid = || ScalarError::InvalidLiteral {
        scalar,
        literal: literal.to_owned(),
    };

    // The parser only reads whole documents, so the literal is placed as the
    // single argument of a single field and everything else must be empty.
    let document = parse_query(format!("{{ f(v: {literal}\n) }}")).map_err(|_| invalid())?;
    if !document.fragments.is_empty() {
        return Err(invalid());
    }
    let DocumentOperations::Single(operation) = document.operations else {
        return Err(invalid());
    };
    let [selection] = operation.node.selection_set.node.items.as_slice() else {
        return Err(invalid());
    };
    let Selection::Field(field) = &selection.node else {
        return Err(invalid());
    };
    let field = &field.node;
    if field.alias.is_some()
        || !field.directives.is_empty()
        || !field.selection_set.node.items.is_empty()
    {
        return Err(invalid());
    }
    let [(_, value)] = field.arguments.as_slice() else {
        return Err(invalid());
    };

    value
        .node
        .clone()
        .into_const()
        .filter(|value| !contains_enum(value))
        .and_then(|value| value.into_json().ok())
        .ok_or_else(invalid)
}

fn contains_enum(value: &ConstValue) -> bool {
    match value {
        ConstValue::Enum(_) => true,
        ConstValue::List(items) => items.iter().any(contains_enum),
        ConstValue::Object(fields) => fields.values().any(contains_enum),
        _ => false,
    }
}

/// Name of a JSON value's type, for error messages.
#[must_use]
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Implement `Serialize` via `Display` and `Deserialize` via `FromStr`.
macro_rules! string_scalar_serde {
    ($ty:ty) => {
        impl ::serde::Serialize for $ty {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use string_scalar_serde;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&Value::Null), "null");
        assert_eq!(json_type_name(&serde_json::json!(1)), "number");
        assert_eq!(json_type_name(&serde_json::json!([1])), "list");
    }

    #[test]
    fn test_error_display() {
        let err = ScalarError::invalid("Color", "red", "must start with '#'");
        assert_eq!(
            err.to_string(),
            "invalid Color value \"red\": must start with '#'"
        );

        let err = ScalarError::unexpected("URL", &serde_json::json!(true));
        assert_eq!(err.to_string(), "URL cannot represent a boolean value");
    }

    #[test]
    fn test_literal_value_object() {
        let value = literal_value("JSON", "{available: true, sizes: [1, 2.5], note: null}").unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "available": true, "sizes": [1, 2.5], "note": null })
        );
        assert_eq!(literal_value("JSON", "null").unwrap(), Value::Null);
    }

    #[test]
    fn test_literal_value_block_string() {
        let value = literal_value("HTML", "\"\"\"\n    <p>\n      hi\n    </p>\n\"\"\"").unwrap();
        assert_eq!(value, Value::String("<p>\n  hi\n</p>".to_owned()));

        let value = literal_value("HTML", r#""""say \""" twice""""#).unwrap();
        assert_eq!(value, Value::String(r#"say """ twice"#.to_owned()));
    }

    #[test]
    fn test_literal_value_rejects_non_constants() {
        for literal in [
            "$price",
            "{\"a\": 1}",
            "1, w: 2",
            "1) g(v: 2",
            "1) @skip(if: true",
            "1) } fragment F on Shop { name(a: 1",
            "",
            "'single'",
            "PRODUCT",
            "{kind: [PRODUCT]}",
        ] {
            let err = literal_value("JSON", literal).unwrap_err();
            assert_eq!(
                err,
                ScalarError::InvalidLiteral {
                    scalar: "JSON",
                    literal: literal.to_owned(),
                },
                "{literal}"
            );
        }
    }
}
