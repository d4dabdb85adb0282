//! Command implementations.
//!
//! Each command returns its stdout text; `main` does the writing.

pub mod catalogue;
pub mod scalar;

use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// No type with this name.
    #[error("Unknown type: {name}{}", did_you_mean(.suggestion.as_deref()))]
    UnknownType {
        name: String,
        suggestion: Option<&'static str>,
    },

    /// No scalar with this name.
    #[error("Unknown scalar: {0}")]
    UnknownScalar(String),

    /// The literal failed the scalar's rules.
    #[error(transparent)]
    Scalar(#[from] storefront_schema_core::ScalarError),

    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] storefront_schema::config::ConfigError),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn did_you_mean(suggestion: Option<&str>) -> String {
    suggestion
        .map(|name| format!(" (did you mean {name}?)"))
        .unwrap_or_default()
}
