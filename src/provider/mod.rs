//! # Provider
//!
//! Resource lifecycle interface and the provider registry.
//!
//! Each resource type implements [`Resource`]. Configuration and state cross
//! the interface as `serde_json::Value` objects keyed by attribute names;
//! problems are reported as [`Diagnostics`], never as `Err`.
//!
//! ## Module Structure
//!
//! - `kafka_v1beta2.rs` - `Kafka` (`kafka.strimzi.io/v1beta2`) manifest resource
//! - `id.rs` - Strictly increasing, timestamp-derived IDs

mod id;
mod kafka_v1beta2;

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::diagnostics::Diagnostics;
use crate::error::ProviderError;
use crate::schema::ResourceSchema;

pub use id::IdGenerator;
pub use kafka_v1beta2::{kafka_schema, marshal_manifest, KafkaV1beta2Resource};

/// Create request: the planned configuration
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub config: Value,
}

/// Create response: the new state, absent when an error occurred
#[derive(Debug, Clone, Default)]
pub struct CreateResponse {
    pub state: Option<Value>,
    pub diagnostics: Diagnostics,
}

/// Read request: the state stored by the caller
#[derive(Debug, Clone)]
pub struct ReadRequest {
    pub state: Value,
}

#[derive(Debug, Clone, Default)]
pub struct ReadResponse {
    pub state: Option<Value>,
    pub diagnostics: Diagnostics,
}

/// Update request: the new configuration and the state it replaces
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub config: Value,
    pub prior_state: Value,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateResponse {
    pub state: Option<Value>,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct DeleteRequest {
    pub state: Value,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteResponse {
    pub diagnostics: Diagnostics,
}

/// A provider-managed resource type
pub trait Resource: fmt::Debug + Send + Sync {
    /// Full type name, e.g. `k8s_kafka_strimzi_io_kafka_v1beta2`
    fn type_name(&self, provider_type_name: &str) -> String;

    fn schema(&self) -> &ResourceSchema;

    /// Validate a configuration without touching any state
    fn validate_config(&self, config: &Value) -> Diagnostics {
        self.schema().validate(config)
    }

    fn create(&self, request: CreateRequest) -> CreateResponse;

    fn read(&self, request: ReadRequest) -> ReadResponse;

    fn update(&self, request: UpdateRequest) -> UpdateResponse;

    fn delete(&self, request: DeleteRequest) -> DeleteResponse;
}

/// Output of [`Provider::render`]
#[derive(Debug, Clone)]
pub struct Rendered {
    /// New resource state, including the computed attributes
    pub state: Value,
    /// Rendered manifest
    pub yaml: String,
    /// Warnings reported by the resource
    pub diagnostics: Diagnostics,
}

/// Registry of resource types under one provider type name
#[derive(Debug)]
pub struct Provider {
    type_name: String,
    resources: BTreeMap<String, Box<dyn Resource>>,
}

impl Provider {
    /// Provider with every built-in resource registered
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        let mut provider = Self::empty(type_name);
        provider.register(Box::new(KafkaV1beta2Resource::new()));
        provider
    }

    /// Provider named from configuration
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.provider_type_name.clone())
    }

    /// Provider without resources
    #[must_use]
    pub fn empty(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            resources: BTreeMap::new(),
        }
    }

    /// Register a resource under its full type name, replacing any previous one
    pub fn register(&mut self, resource: Box<dyn Resource>) {
        let name = resource.type_name(&self.type_name);
        debug!("Registering resource type {}", name);
        self.resources.insert(name, resource);
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn resource(&self, type_name: &str) -> Option<&dyn Resource> {
        self.resources.get(type_name).map(|resource| &**resource)
    }

    /// Registered resource type names, sorted
    pub fn resource_types(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Schemas of all registered resources keyed by type name
    #[must_use]
    pub fn schemas(&self) -> BTreeMap<&str, &ResourceSchema> {
        self.resources
            .iter()
            .map(|(name, resource)| (name.as_str(), resource.schema()))
            .collect()
    }

    /// Validate a configuration for the named resource type
    #[must_use]
    pub fn validate_resource_config(&self, type_name: &str, config: &Value) -> Diagnostics {
        match self.resource(type_name) {
            Some(resource) => resource.validate_config(config),
            None => {
                let mut diagnostics = Diagnostics::new();
                diagnostics.add_error(
                    "Unknown resource type",
                    format!(
                        "The provider {} does not support resource type \"{type_name}\".",
                        self.type_name
                    ),
                );
                diagnostics
            }
        }
    }

    /// Run the create flow and return the state and manifest
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::UnknownResourceType`] for unregistered types,
    /// [`ProviderError::Diagnostics`] when the resource reported errors and
    /// [`ProviderError::MissingState`] when no manifest was produced.
    pub fn render(&self, type_name: &str, config: Value) -> Result<Rendered, ProviderError> {
        let resource = self
            .resource(type_name)
            .ok_or_else(|| ProviderError::UnknownResourceType(type_name.to_string()))?;

        let response = resource.create(CreateRequest { config });
        if response.diagnostics.has_error() {
            warn!(
                "Rendering {} failed with {} error(s)",
                type_name,
                response.diagnostics.errors().count()
            );
            return Err(ProviderError::Diagnostics {
                resource_type: type_name.to_string(),
                diagnostics: response.diagnostics,
            });
        }

        let state = response.state.ok_or(ProviderError::MissingState)?;
        let yaml = state
            .get("yaml")
            .and_then(Value::as_str)
            .ok_or(ProviderError::MissingState)?
            .to_string();
        let id = state.get("id").and_then(Value::as_str).unwrap_or_default();
        info!("Rendered {} id={}", type_name, id);
        Ok(Rendered {
            state,
            yaml,
            diagnostics: response.diagnostics,
        })
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_PROVIDER_TYPE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_provider_registers_kafka() {
        let provider = Provider::default();
        assert_eq!(provider.type_name(), "k8s");
        let types: Vec<&str> = provider.resource_types().collect();
        assert_eq!(types, vec!["k8s_kafka_strimzi_io_kafka_v1beta2"]);
        assert!(provider
            .resource("k8s_kafka_strimzi_io_kafka_v1beta2")
            .is_some());
    }

    #[test]
    fn test_custom_type_name() {
        let provider = Provider::new("strimzi");
        assert!(provider
            .resource("strimzi_kafka_strimzi_io_kafka_v1beta2")
            .is_some());
        assert_eq!(provider.schemas().len(), 1);
    }

    #[test]
    fn test_unknown_resource_type() {
        let provider = Provider::default();
        let diagnostics = provider.validate_resource_config("k8s_unknown", &json!({}));
        assert!(diagnostics.has_error());

        let err = provider
            .render("k8s_unknown", json!({}))
            .expect_err("Should reject unknown resource type");
        assert!(matches!(err, ProviderError::UnknownResourceType(name) if name == "k8s_unknown"));
    }

    #[test]
    fn test_render_reports_diagnostics() {
        let provider = Provider::default();
        let err = provider
            .render("k8s_kafka_strimzi_io_kafka_v1beta2", json!({"metadata": {"name": "x"}}))
            .expect_err("Should require spec");
        let diagnostics = err.diagnostics().expect("Should carry diagnostics");
        assert!(diagnostics
            .iter()
            .any(|d| d.summary == "Missing required argument"));
    }
}
