//! Executor configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_API_VERSION` - Storefront API version served (default: 2025-01)
//! - `STOREFRONT_MAX_PAGE_SIZE` - Largest `first`/`last` accepted (default: 250)

use thiserror::Error;

use crate::connection::MAX_PAGE_SIZE;

/// API version this schema describes.
pub const DEFAULT_API_VERSION: &str = "2025-01";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Settings the [`Executor`](crate::resolvers::Executor) applies to every
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// API version handle (`2025-01` or `unstable`).
    pub api_version: String,
    /// Largest page a connection field may request.
    pub max_page_size: i32,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_owned(),
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl ExecutorConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_version =
            lookup("STOREFRONT_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_owned());
        validate_api_version(&api_version)?;

        let max_page_size = match lookup("STOREFRONT_MAX_PAGE_SIZE") {
            Some(raw) => parse_page_size(&raw)?,
            None => MAX_PAGE_SIZE,
        };

        Ok(Self {
            api_version,
            max_page_size,
        })
    }
}

/// Accept `YYYY-MM` handles and `unstable`.
fn validate_api_version(version: &str) -> Result<(), ConfigError> {
    if version == "unstable" {
        return Ok(());
    }

    let valid = match version.split_once('-') {
        Some((year, month)) => {
            year.len() == 4
                && year.bytes().all(|b| b.is_ascii_digit())
                && month
                    .parse::<u8>()
                    .is_ok_and(|m| (1..=12).contains(&m) && month.len() == 2)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar(
            "STOREFRONT_API_VERSION".to_string(),
            format!("expected YYYY-MM or unstable, got {version:?}"),
        ))
    }
}

fn parse_page_size(raw: &str) -> Result<i32, ConfigError> {
    let invalid = |reason: String| {
        ConfigError::InvalidEnvVar("STOREFRONT_MAX_PAGE_SIZE".to_string(), reason)
    };

    let size = raw.trim().parse::<i32>().map_err(|e| invalid(e.to_string()))?;
    if !(1..=MAX_PAGE_SIZE).contains(&size) {
        return Err(invalid(format!("must be between 1 and {MAX_PAGE_SIZE}")));
    }
    Ok(size)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ExecutorConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ExecutorConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ExecutorConfig::default());
        assert_eq!(config.api_version, "2025-01");
        assert_eq!(config.max_page_size, 250);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("STOREFRONT_API_VERSION", "unstable"),
            ("STOREFRONT_MAX_PAGE_SIZE", "50"),
        ])
        .unwrap();
        assert_eq!(config.api_version, "unstable");
        assert_eq!(config.max_page_size, 50);
    }

    #[test]
    fn test_invalid_api_version() {
        for version in ["2025", "25-01", "2025-13", "2025-1", "latest"] {
            let err = load(&[("STOREFRONT_API_VERSION", version)]).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STOREFRONT_API_VERSION"));
        }
    }

    #[test]
    fn test_invalid_page_size() {
        assert!(load(&[("STOREFRONT_MAX_PAGE_SIZE", "0")]).is_err());
        assert!(load(&[("STOREFRONT_MAX_PAGE_SIZE", "251")]).is_err());
        assert!(load(&[("STOREFRONT_MAX_PAGE_SIZE", "ten")]).is_err());
    }
}
