//! # Common Types
//!
//! Building blocks shared by several Kafka component specs: container
//! resources, JVM options, logging, probes and metrics configuration.

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema for free-form fields (broker `config`, pod `template`)
///
/// Kubernetes keeps unknown fields for these, so the schema is an open object.
pub(crate) fn preserve_unknown_fields(_gen: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "object",
        "x-kubernetes-preserve-unknown-fields": true
    })
}

/// CPU and memory resources to reserve
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequirements {
    /// Maximum amount of compute resources allowed (e.g. `cpu: "2"`, `memory: 4Gi`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<BTreeMap<String, String>>,
    /// Minimum amount of compute resources required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests: Option<BTreeMap<String, String>>,
}

/// JVM options for pods
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JvmOptions {
    /// -Xms option to the JVM
    #[serde(default, rename = "-Xms", skip_serializing_if = "Option::is_none")]
    #[schemars(regex(pattern = r"^[0-9]+[mMgG]?$"))]
    pub xms: Option<String>,
    /// -Xmx option to the JVM
    #[serde(default, rename = "-Xmx", skip_serializing_if = "Option::is_none")]
    #[schemars(regex(pattern = r"^[0-9]+[mMgG]?$"))]
    pub xmx: Option<String>,
    /// Specifies whether the Garbage Collection logging is enabled. The default is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gc_logging_enabled: Option<bool>,
    /// A map of additional system properties which will be passed using the `-D` option to the JVM.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_system_properties: Option<Vec<SystemProperty>>,
    /// A map of -XX options to the JVM.
    #[serde(default, rename = "-XX", skip_serializing_if = "Option::is_none")]
    pub xx: Option<BTreeMap<String, String>>,
}

/// A single `-D` system property
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemProperty {
    /// The system property name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The system property value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Logging type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoggingType {
    Inline,
    External,
}

/// Logging configuration for a component
///
/// `inline` logging sets `loggers` directly; `external` logging reads a
/// log4j configuration from a ConfigMap through `valueFrom`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Logging {
    /// Logging type, must be either 'inline' or 'external'.
    pub r#type: LoggingType,
    /// A Map from logger name to logger level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loggers: Option<BTreeMap<String, String>>,
    /// `ConfigMap` entry where the logging configuration is stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_from: Option<ExternalValueSource>,
}

/// Reference to a value held outside the resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalValueSource {
    /// Reference to the key in the ConfigMap containing the configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_map_key_ref: Option<ConfigMapKeySelector>,
}

/// Selects a key of a ConfigMap
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMapKeySelector {
    /// The key to select.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Name of the referent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Specify whether the ConfigMap or its key must be defined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

/// Container health check probe
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Probe {
    /// Minimum consecutive failures for the probe to be considered failed after having succeeded. Defaults to 3. Minimum value is 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub failure_threshold: Option<i32>,
    /// The initial delay before first the health is first checked. Default to 15 seconds. Minimum value is 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0))]
    pub initial_delay_seconds: Option<i32>,
    /// How often (in seconds) to perform the probe. Default to 10 seconds. Minimum value is 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub period_seconds: Option<i32>,
    /// Minimum consecutive successes for the probe to be considered successful after having failed. Defaults to 1. Must be 1 for liveness. Minimum value is 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub success_threshold: Option<i32>,
    /// The timeout for each attempted health check. Default to 5 seconds. Minimum value is 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub timeout_seconds: Option<i32>,
}

/// Metrics exporter type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum MetricsConfigType {
    #[serde(rename = "jmxPrometheusExporter")]
    JmxPrometheusExporter,
}

/// Metrics configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsConfig {
    /// Metrics type. Only 'jmxPrometheusExporter' supported currently.
    pub r#type: MetricsConfigType,
    /// ConfigMap entry where the Prometheus JMX Exporter configuration is stored.
    pub value_from: ExternalValueSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jvm_options_use_dash_prefixed_keys() {
        let opts = JvmOptions {
            xms: Some("512m".to_string()),
            xmx: Some("2g".to_string()),
            xx: Some(BTreeMap::from([(
                "UseG1GC".to_string(),
                "true".to_string(),
            )])),
            ..JvmOptions::default()
        };

        let value = serde_json::to_value(&opts).unwrap();
        assert_eq!(value["-Xms"], "512m");
        assert_eq!(value["-Xmx"], "2g");
        assert_eq!(value["-XX"]["UseG1GC"], "true");
        assert!(value.get("gcLoggingEnabled").is_none());
    }

    #[test]
    fn test_logging_type_is_lowercase() {
        let logging: Logging = serde_json::from_value(serde_json::json!({
            "type": "inline",
            "loggers": {"kafka.root.logger.level": "INFO"}
        }))
        .unwrap();
        assert_eq!(logging.r#type, LoggingType::Inline);
        assert!(serde_json::from_value::<Logging>(serde_json::json!({"type": "INLINE"})).is_err());
    }

    #[test]
    fn test_metrics_config_type_name() {
        let value = serde_json::to_value(MetricsConfigType::JmxPrometheusExporter).unwrap();
        assert_eq!(value, "jmxPrometheusExporter");
    }
}
