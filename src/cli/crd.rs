//! # CRD Command
//!
//! Prints the `Kafka` CustomResourceDefinition.

use anyhow::{Context, Result};
use strimzi_kafka_provider::crd::crd_yaml;

pub fn crd_command() -> Result<()> {
    let yaml = crd_yaml().context("Failed to serialize CRD to YAML")?;
    print!("{yaml}");
    Ok(())
}
