//! Catalogue inspection commands.
//!
//! # Usage
//!
//! ```bash
//! sfs list --kind union
//! sfs describe CartLine
//! sfs directives
//! sfs export --pretty
//! ```

use storefront_schema::config::ExecutorConfig;
use storefront_schema::registry::{self, TypeKind};

use super::CliError;

/// One `KIND<TAB>Name` line per type, sorted by name.
pub fn list(kind: Option<TypeKind>) -> String {
    let entries: Vec<_> = match kind {
        Some(kind) => registry::by_kind(kind).collect(),
        None => registry::TYPES.iter().collect(),
    };
    tracing::debug!(count = entries.len(), "Listing types");

    entries
        .iter()
        .map(|entry| format!("{}\t{}", entry.kind, entry.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON for one type.
pub fn describe(name: &str) -> Result<String, CliError> {
    let description = registry::describe(name).ok_or_else(|| CliError::UnknownType {
        name: name.to_owned(),
        suggestion: suggest(name),
    })?;
    Ok(serde_json::to_string_pretty(&description)?)
}

/// Pretty JSON for the declared directives.
pub fn directives() -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(registry::DIRECTIVES)?)
}

/// The whole catalogue as JSON, labelled with the configured API version.
pub fn export(config: &ExecutorConfig, pretty: bool) -> Result<String, CliError> {
    let json = registry::export_json(&config.api_version, pretty)?;
    tracing::info!(
        types = registry::TYPES.len(),
        api_version = %config.api_version,
        "Exported schema catalogue"
    );
    Ok(json)
}

/// A type whose name differs only in case.
fn suggest(name: &str) -> Option<&'static str> {
    registry::TYPES
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .map(|entry| entry.name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_list_by_kind() {
        let scalars = list(Some(TypeKind::Scalar));
        let lines: Vec<_> = scalars.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(lines.contains(&"SCALAR\tDecimal"));
        assert!(lines.iter().all(|line| line.starts_with("SCALAR\t")));
    }

    #[test]
    fn test_list_all() {
        assert_eq!(list(None).lines().count(), registry::TYPES.len());
    }

    #[test]
    fn test_describe_enum() {
        let json: serde_json::Value = serde_json::from_str(&describe("SitemapType").unwrap()).unwrap();
        assert_eq!(json["kind"], "ENUM");
        assert!(json["enumValues"].as_array().unwrap().contains(&"PRODUCT".into()));
    }

    #[test]
    fn test_describe_unknown_suggests_case() {
        let err = describe("productvariant").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown type: productvariant (did you mean ProductVariant?)"
        );

        let err = describe("Checkout").unwrap_err();
        assert_eq!(err.to_string(), "Unknown type: Checkout");
    }

    #[test]
    fn test_directives() {
        let json: serde_json::Value = serde_json::from_str(&directives().unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 3);
        assert_eq!(json[1]["name"], "defer");
    }

    #[test]
    fn test_export_compact_and_pretty_agree() {
        let config = ExecutorConfig::default();
        let compact: serde_json::Value =
            serde_json::from_str(&export(&config, false).unwrap()).unwrap();
        let pretty: serde_json::Value =
            serde_json::from_str(&export(&config, true).unwrap()).unwrap();
        assert_eq!(compact, pretty);
        assert_eq!(compact["queryType"], "QueryRoot");
        assert_eq!(compact["apiVersion"], "2025-01");
    }

    #[test]
    fn test_export_uses_configured_api_version() {
        let config = ExecutorConfig {
            api_version: "2024-10".to_owned(),
            ..ExecutorConfig::default()
        };
        let json: serde_json::Value =
            serde_json::from_str(&export(&config, false).unwrap()).unwrap();
        assert_eq!(json["apiVersion"], "2024-10");
    }
}
