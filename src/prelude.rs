//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ## Usage
//!
//! ```rust
//! use strimzi_kafka_provider::prelude::*;
//! ```
//!
//! This brings into scope:
//! - All CRD types (Kafka, KafkaSpec, KafkaManifest, etc.)
//! - The `Resource` trait and its request/response types
//! - Schema and diagnostics types
//! - Config types (AppConfig)

// CRD types - most commonly used
pub use crate::crd::*;

// Provider lifecycle
pub use crate::provider::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, KafkaV1beta2Resource, Provider,
    ReadRequest, ReadResponse, Rendered, Resource, UpdateRequest, UpdateResponse,
};

// Schema and diagnostics
pub use crate::diagnostics::{AttributePath, Diagnostic, Diagnostics, Severity};
pub use crate::schema::{Attribute, AttributeType, ResourceSchema, Validator};

// Config types - for configuration management
pub use crate::config::{AppConfig, LogFormat, LogLevel};

// Common error types
pub use crate::error::ProviderError;
