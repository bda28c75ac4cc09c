//! Strimzi Kafka Provider Library
//!
//! Terraform-style provider resource that renders Strimzi `Kafka`
//! (`kafka.strimzi.io/v1beta2`) manifests. The provider never talks to a
//! cluster; it validates configuration and produces YAML.
//!
//! ## Quick Start
//!
//! ```rust
//! use strimzi_kafka_provider::prelude::*;
//! ```
//!
//! This brings commonly used types and traits into scope. For more specific imports,
//! use the individual modules.

pub mod config;
pub mod constants;
pub mod crd;
pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod observability;
pub mod prelude;
pub mod provider;
pub mod schema;
