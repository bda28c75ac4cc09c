//! # strimzi-kafka CLI
//!
//! Command-line front end for the Strimzi Kafka provider.
//!
//! Renders `Kafka` manifests from provider configuration (attribute names,
//! snake_case) without a Terraform run, validates configuration and prints
//! the derived schema or the CRD.
//!
//! ## Usage
//!
//! ```bash
//! # Render a manifest from a YAML or JSON configuration file
//! strimzi-kafka render cluster.yaml
//!
//! # Render every configuration below a directory into one multi-document file
//! strimzi-kafka render ./clusters --output kafka.yaml
//!
//! # Print the resulting provider state instead of the manifest
//! strimzi-kafka render cluster.yaml --state
//!
//! # Read configuration from stdin
//! cat cluster.json | strimzi-kafka render -
//!
//! # Validate configuration
//! strimzi-kafka validate ./clusters
//!
//! # Print the derived resource schema
//! strimzi-kafka schema
//!
//! # Print the Kafka CustomResourceDefinition
//! strimzi-kafka crd
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use strimzi_kafka_provider::config::{AppConfig, LogLevel};
use strimzi_kafka_provider::constants::KAFKA_V1BETA2_TYPE_SUFFIX;
use strimzi_kafka_provider::observability;
use strimzi_kafka_provider::provider::Provider;

mod crd;
mod render;
mod schema;
mod validate;
mod version;

/// Strimzi Kafka manifest provider CLI
#[derive(Parser)]
#[command(name = "strimzi-kafka")]
#[command(
    about = "Render and validate Strimzi Kafka manifests",
    long_about = None,
    after_help = "\
Configuration uses provider attribute names (snake_case), for example:

  metadata:
    name: my-cluster
  spec:
    kafka:
      replicas: 3
      listeners:
        - name: plain
          port: 9092
          type: internal
          tls: false

Examples:
  strimzi-kafka render cluster.yaml
  strimzi-kafka validate ./clusters
  strimzi-kafka schema
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Provider type name (defaults to PROVIDER_TYPE_NAME or 'k8s')
    #[arg(long, global = true)]
    provider_type_name: Option<String>,

    /// Resource type to use (defaults to the Kafka v1beta2 resource)
    #[arg(long, global = true)]
    resource_type: Option<String>,

    /// Log level (defaults to LOG_LEVEL or INFO)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render manifests from configuration
    Render {
        /// Configuration file, directory, or '-' for stdin
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Write the output to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the resulting provider state as JSON instead of the manifest
        #[arg(long)]
        state: bool,
    },
    /// Validate configuration and print diagnostics
    Validate {
        /// Configuration file, directory, or '-' for stdin
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Print diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the resource schema as JSON
    Schema,
    /// Print the Kafka CustomResourceDefinition as YAML
    Crd,
    /// Print build information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(name) = cli.provider_type_name {
        config.provider_type_name = name;
    }
    observability::init_logging(&config)?;

    let provider = Provider::from_config(&config);
    let resource_type = cli
        .resource_type
        .unwrap_or_else(|| format!("{}{KAFKA_V1BETA2_TYPE_SUFFIX}", provider.type_name()));

    match cli.command {
        Commands::Render {
            path,
            output,
            state,
        } => render::render_command(&provider, &resource_type, &path, output.as_deref(), state),
        Commands::Validate { path, json } => {
            validate::validate_command(&provider, &resource_type, &path, json)
        }
        Commands::Schema => schema::schema_command(&provider, &resource_type),
        Commands::Crd => crd::crd_command(),
        Commands::Version => {
            version::version_command();
            Ok(())
        }
    }
}
