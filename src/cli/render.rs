//! # Render Command
//!
//! Runs the create flow for each loaded configuration and prints the
//! manifests (or the resulting states).

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use strimzi_kafka_provider::loader::load_configs;
use strimzi_kafka_provider::provider::Provider;

/// Render manifests for every configuration found at `path`
pub fn render_command(
    provider: &Provider,
    resource_type: &str,
    path: &Path,
    output: Option<&Path>,
    state: bool,
) -> Result<()> {
    let configs = load_configs(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    if configs.is_empty() {
        bail!("No configuration found in {}", path.display());
    }

    let mut manifests = Vec::with_capacity(configs.len());
    let mut states = Vec::with_capacity(configs.len());
    for loaded in configs {
        let rendered = provider
            .render(resource_type, loaded.config)
            .with_context(|| {
                format!(
                    "Failed to render {} (document {})",
                    loaded.source.display(),
                    loaded.document
                )
            })?;
        for diagnostic in &rendered.diagnostics {
            eprintln!("{diagnostic}");
        }
        manifests.push(rendered.yaml);
        states.push(rendered.state);
    }

    let text = if state {
        let value = if states.len() == 1 {
            states.remove(0)
        } else {
            Value::Array(states)
        };
        let mut json =
            serde_json::to_string_pretty(&value).context("Failed to serialize state")?;
        json.push('\n');
        json
    } else {
        join_documents(&manifests)
    };

    match output {
        Some(file) => std::fs::write(file, text)
            .with_context(|| format!("Failed to write {}", file.display()))?,
        None => print!("{text}"),
    }
    Ok(())
}

/// Join YAML documents into one multi-document stream
fn join_documents(documents: &[String]) -> String {
    documents.join("---\n")
}
