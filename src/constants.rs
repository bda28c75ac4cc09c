//! # Constants
//!
//! Shared constants used throughout the provider.
//!
//! These values represent reasonable defaults and can be overridden via
//! configuration or environment variables where applicable.

/// API group of the Strimzi Kafka CRDs
pub const KAFKA_API_GROUP: &str = "kafka.strimzi.io";

/// `apiVersion` stamped on every rendered `Kafka` manifest
pub const KAFKA_API_VERSION: &str = "kafka.strimzi.io/v1beta2";

/// `kind` stamped on every rendered `Kafka` manifest
pub const KAFKA_KIND: &str = "Kafka";

/// Default provider type name (prefix of every resource type name)
pub const DEFAULT_PROVIDER_TYPE_NAME: &str = "k8s";

/// Resource type name suffix of the `Kafka` v1beta2 resource
/// Full name is `<provider type name>` + this suffix
pub const KAFKA_V1BETA2_TYPE_SUFFIX: &str = "_kafka_strimzi_io_kafka_v1beta2";

/// Version of the derived resource schema
pub const RESOURCE_SCHEMA_VERSION: i64 = 0;

/// Default global log level
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default log format (json, text)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Summary of the diagnostic emitted when the manifest cannot be marshalled
pub const MARSHAL_ERROR_SUMMARY: &str = "Error marshalling YAML";

/// File extensions picked up when loading configuration from a directory
pub const CONFIG_FILE_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];
