//! Storefront Schema CLI - Inspect the schema catalogue.
//!
//! # Usage
//!
//! ```bash
//! # List every enum of the schema
//! sfs list --kind enum
//!
//! # Show one type with its interfaces, members or values
//! sfs describe Product
//!
//! # Dump the whole catalogue as JSON
//! sfs export --pretty -o schema.json
//!
//! # Check a scalar literal
//! sfs scalar Decimal '"29.99"'
//! ```
//!
//! # Commands
//!
//! - `list` - Type names, optionally filtered by kind
//! - `describe` - One type as JSON
//! - `directives` - Declared directives as JSON
//! - `export` - The full catalogue as JSON
//! - `scalar` - Parse a literal with a scalar's rules
//!
//! Command output goes to stdout, logs to stderr.
//!
//! # Environment Variables
//!
//! - `STOREFRONT_API_VERSION` - API version written by `export` (default: 2025-01)
//! - `STOREFRONT_MAX_PAGE_SIZE` - Validated with the rest of the configuration
//! - `SFS_LOG_FORMAT` - `pretty` or `json`
//! - `RUST_LOG` - Log filter

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use storefront_schema::config::ExecutorConfig;
use storefront_schema::registry::TypeKind;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "sfs")]
#[command(author, version, about = "Storefront schema catalogue tools")]
struct Cli {
    /// Log output format
    #[arg(long, global = true, env = "SFS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List type names
    List {
        /// Only list types of this kind (`object`, `input_object`, ...)
        #[arg(short, long)]
        kind: Option<TypeKind>,
    },
    /// Describe a type
    Describe {
        /// Schema name of the type
        name: String,
    },
    /// Show the declared directives
    Directives,
    /// Export the catalogue as JSON
    Export {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Parse a GraphQL literal as a scalar
    Scalar {
        /// Scalar name (`Decimal`, `URL`, `ID`, ...)
        name: String,

        /// GraphQL literal, quotes included for strings
        literal: String,
    },
}

fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "storefront_schema=info,storefront_schema_cli=info".into());

    let json_layer = (format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (format == LogFormat::Pretty)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_format);

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = ExecutorConfig::from_env()?;
    tracing::debug!(api_version = %config.api_version, "Loaded configuration");

    let output = match cli.command {
        Commands::List { kind } => commands::catalogue::list(kind),
        Commands::Describe { name } => commands::catalogue::describe(&name)?,
        Commands::Directives => commands::catalogue::directives()?,
        Commands::Export { pretty, output } => {
            let json = commands::catalogue::export(&config, pretty)?;
            if let Some(path) = output {
                std::fs::write(&path, json)?;
                tracing::info!(path = %path.display(), "Schema exported");
                return Ok(());
            }
            json
        }
        Commands::Scalar { name, literal } => commands::scalar::normalize(&name, &literal)?,
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}
