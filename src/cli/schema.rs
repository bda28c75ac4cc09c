//! # Schema Command
//!
//! Prints the derived attribute schema of a resource type.

use anyhow::{anyhow, Context, Result};
use strimzi_kafka_provider::provider::Provider;

pub fn schema_command(provider: &Provider, resource_type: &str) -> Result<()> {
    let resource = provider.resource(resource_type).ok_or_else(|| {
        anyhow!(
            "Unknown resource type '{resource_type}'.\n\nAvailable resource types:\n  {}",
            provider.resource_types().collect::<Vec<_>>().join("\n  ")
        )
    })?;

    let json = serde_json::to_string_pretty(resource.schema())
        .context("Failed to serialize resource schema")?;
    println!("{json}");
    Ok(())
}
