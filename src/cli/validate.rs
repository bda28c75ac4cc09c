//! # Validate Command
//!
//! Validates configuration against the resource schema and prints the
//! diagnostics.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::json;
use strimzi_kafka_provider::loader::load_configs;
use strimzi_kafka_provider::provider::Provider;

/// Validate every configuration found at `path`
///
/// Fails when any configuration has an error diagnostic.
pub fn validate_command(
    provider: &Provider,
    resource_type: &str,
    path: &Path,
    json: bool,
) -> Result<()> {
    let configs = load_configs(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    if configs.is_empty() {
        bail!("No configuration found in {}", path.display());
    }

    let mut failed = 0;
    let mut report = Vec::with_capacity(configs.len());
    for loaded in &configs {
        let diagnostics = provider.validate_resource_config(resource_type, &loaded.config);
        if diagnostics.has_error() {
            failed += 1;
        }

        if json {
            report.push(json!({
                "source": loaded.source.display().to_string(),
                "document": loaded.document,
                "valid": !diagnostics.has_error(),
                "diagnostics": diagnostics,
            }));
        } else if diagnostics.is_empty() {
            println!("{} (document {}): OK", loaded.source.display(), loaded.document);
        } else {
            println!("{} (document {}):", loaded.source.display(), loaded.document);
            println!("{diagnostics}\n");
        }
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize diagnostics")?
        );
    }

    if failed > 0 {
        bail!("{failed} of {} configuration(s) failed validation", configs.len());
    }
    Ok(())
}
