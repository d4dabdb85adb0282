//! Scalar literal checks.
//!
//! # Usage
//!
//! ```bash
//! sfs scalar Decimal '"29.99"'
//! sfs scalar UnsignedInt64 '"18446744073709551615"'
//! sfs scalar Color '"#FFF"'
//! ```

use serde_json::Value;
use storefront_schema_core::{
    Color, DateTime, Decimal, Html, Id, Iso8601DateTime, Json, Scalar, ScalarError, UnsignedInt64,
    Url, json_type_name, literal_value,
};

use super::CliError;

/// Parse `literal` with the rules of scalar `name` and return the value as
/// it would be sent on the wire.
pub fn normalize(name: &str, literal: &str) -> Result<String, CliError> {
    let value = match name {
        "Color" => wire::<Color>(literal)?,
        "DateTime" => wire::<DateTime>(literal)?,
        "Decimal" => wire::<Decimal>(literal)?,
        "HTML" => wire::<Html>(literal)?,
        "ID" => wire::<Id>(literal)?,
        "ISO8601DateTime" => wire::<Iso8601DateTime>(literal)?,
        "JSON" => wire::<Json>(literal)?,
        "URL" => wire::<Url>(literal)?,
        "UnsignedInt64" => wire::<UnsignedInt64>(literal)?,
        "Boolean" => built_in("Boolean", literal)?,
        "Float" => built_in("Float", literal)?,
        "Int" => built_in("Int", literal)?,
        "String" => built_in("String", literal)?,
        _ => return Err(CliError::UnknownScalar(name.to_owned())),
    };
    tracing::debug!(scalar = name, "Literal accepted");
    Ok(value.to_string())
}

fn wire<S: Scalar>(literal: &str) -> Result<Value, ScalarError> {
    S::parse_literal(literal).map(|scalar| scalar.to_value())
}

fn built_in(name: &'static str, literal: &str) -> Result<Value, ScalarError> {
    let value = literal_value(name, literal)?;

    let accepted = match name {
        "Boolean" => value.is_boolean(),
        // Int literals are coerced to Float
        "Float" => value.is_number(),
        "Int" => value
            .as_i64()
            .is_some_and(|n| i32::try_from(n).is_ok()),
        _ => value.is_string(),
    };

    if accepted {
        Ok(value)
    } else {
        Err(ScalarError::UnexpectedType {
            scalar: name,
            found: json_type_name(&value),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_custom_scalars() {
        assert_eq!(normalize("Decimal", "\"29.99\"").unwrap(), "\"29.99\"");
        assert_eq!(
            normalize("URL", "\"https://shop.example.com/products/x\"").unwrap(),
            "\"https://shop.example.com/products/x\""
        );
        assert_eq!(normalize("JSON", "{a: 1, b: [true]}").unwrap(), "{\"a\":1,\"b\":[true]}");
        assert!(normalize("JSON", "{\"a\": 1}").is_err());
    }

    #[test]
    fn test_rejected_literal() {
        let err = normalize("Decimal", "\"abc\"").unwrap_err();
        assert!(matches!(err, CliError::Scalar(ScalarError::Invalid { scalar: "Decimal", .. })));
    }

    #[test]
    fn test_built_ins() {
        assert_eq!(normalize("Int", "42").unwrap(), "42");
        assert_eq!(normalize("Boolean", "true").unwrap(), "true");
        assert!(normalize("Int", "4294967296").is_err());
        assert!(normalize("String", "42").is_err());
        assert!(normalize("Float", "not a number").is_err());
        assert!(normalize("String", "UNQUOTED").is_err());
        assert_eq!(
            normalize("String", "\"\"\"\n  line one\n    line two\n\"\"\"").unwrap(),
            "\"line one\\n  line two\""
        );
    }

    #[test]
    fn test_unknown_scalar() {
        assert!(matches!(
            normalize("Money", "1").unwrap_err(),
            CliError::UnknownScalar(name) if name == "Money"
        ));
    }
}
