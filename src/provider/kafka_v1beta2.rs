//! # Kafka v1beta2 Resource
//!
//! Renders `Kafka` (`kafka.strimzi.io/v1beta2`) manifests.
//!
//! Create and Update share one flow:
//! 1. Validate the configuration against the derived schema
//! 2. Map attribute names to CRD field names
//! 3. Decode into [`KafkaManifest`] and build the [`Kafka`] object (GVK stamped)
//! 4. Assign a timestamp ID
//! 5. Marshal to YAML and return the configuration plus computed attributes
//!
//! Read and Delete do nothing: the caller's state is authoritative and no
//! cluster is ever contacted.

use kube::Resource as _;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, IdGenerator, ReadRequest,
    ReadResponse, Resource, UpdateRequest, UpdateResponse,
};
use crate::constants::{
    KAFKA_API_VERSION, KAFKA_KIND, KAFKA_V1BETA2_TYPE_SUFFIX, MARSHAL_ERROR_SUMMARY,
    RESOURCE_SCHEMA_VERSION,
};
use crate::crd::{Kafka, KafkaManifest};
use crate::diagnostics::Diagnostics;
use crate::schema::{derive_attributes, Attribute, ResourceSchema};

/// Attribute schema of the `Kafka` v1beta2 resource
///
/// Computed `id`, `api_version`, `kind` and `yaml` followed by the
/// attributes derived from [`KafkaManifest`] (`metadata` and `spec`).
#[must_use]
pub fn kafka_schema() -> ResourceSchema {
    let root = schemars::schema_for!(KafkaManifest);

    let mut attributes = vec![
        Attribute::computed_string(
            "id",
            "Time of the last change, in Unix nanoseconds. Used to detect changes.",
        ),
        Attribute::computed_string(
            "api_version",
            &format!("The API group and version of the object, always '{KAFKA_API_VERSION}'."),
        ),
        Attribute::computed_string(
            "kind",
            &format!("The kind of the object, always '{KAFKA_KIND}'."),
        ),
        Attribute::computed_string("yaml", "The generated manifest in YAML format."),
    ];
    attributes.extend(derive_attributes(root.as_value()));

    ResourceSchema {
        version: RESOURCE_SCHEMA_VERSION,
        description: "Kafka is the Schema for the kafkas API, rendered as a Kubernetes manifest."
            .to_string(),
        attributes,
    }
}

/// Marshal a manifest object to YAML
///
/// # Errors
///
/// Returns the serializer error unchanged.
pub fn marshal_manifest<T: Serialize>(manifest: &T) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(manifest)
}

/// Provider resource for `Kafka` v1beta2 manifests
#[derive(Debug)]
pub struct KafkaV1beta2Resource {
    schema: ResourceSchema,
    ids: IdGenerator,
}

impl Default for KafkaV1beta2Resource {
    fn default() -> Self {
        Self::new()
    }
}

impl KafkaV1beta2Resource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: kafka_schema(),
            ids: IdGenerator::new(),
        }
    }

    /// Shared Create/Update flow; `None` state means the operation failed
    fn render(&self, config: &Value) -> (Option<Value>, Diagnostics) {
        let mut diagnostics = self.validate_config(config);
        if diagnostics.has_error() {
            warn!(
                "Kafka configuration rejected with {} error(s)",
                diagnostics.errors().count()
            );
            return (None, diagnostics);
        }

        let wire = self.schema.to_wire(config);
        let manifest: KafkaManifest = match serde_json::from_value(wire) {
            Ok(manifest) => manifest,
            Err(e) => {
                diagnostics.add_error(
                    "Error decoding configuration",
                    format!("Could not decode configuration into a Kafka manifest, unexpected error: {e}"),
                );
                return (None, diagnostics);
            }
        };
        let kafka = manifest.into_resource();

        let id = self.ids.next_id();
        let yaml = match marshal_manifest(&kafka) {
            Ok(yaml) => yaml,
            Err(e) => {
                diagnostics.add_error(
                    MARSHAL_ERROR_SUMMARY,
                    format!("Could not marshal manifest to YAML, unexpected error: {e}"),
                );
                return (None, diagnostics);
            }
        };

        let mut state = config.as_object().cloned().unwrap_or_default();
        state.insert("id".to_string(), Value::from(id));
        state.insert(
            "api_version".to_string(),
            Value::from(Kafka::api_version(&()).into_owned()),
        );
        state.insert("kind".to_string(), Value::from(Kafka::kind(&()).into_owned()));
        state.insert("yaml".to_string(), Value::from(yaml));
        (Some(Value::Object(state)), diagnostics)
    }
}

impl Resource for KafkaV1beta2Resource {
    fn type_name(&self, provider_type_name: &str) -> String {
        format!("{provider_type_name}{KAFKA_V1BETA2_TYPE_SUFFIX}")
    }

    fn schema(&self) -> &ResourceSchema {
        &self.schema
    }

    fn create(&self, request: CreateRequest) -> CreateResponse {
        debug!("Create Kafka resource");
        let (state, diagnostics) = self.render(&request.config);
        CreateResponse { state, diagnostics }
    }

    fn read(&self, request: ReadRequest) -> ReadResponse {
        debug!("Read Kafka resource");
        ReadResponse {
            state: Some(request.state),
            diagnostics: Diagnostics::new(),
        }
    }

    fn update(&self, request: UpdateRequest) -> UpdateResponse {
        let prior_id = request
            .prior_state
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default();
        debug!("Update Kafka resource, prior id={}", prior_id);
        let (state, diagnostics) = self.render(&request.config);
        UpdateResponse { state, diagnostics }
    }

    fn delete(&self, _request: DeleteRequest) -> DeleteResponse {
        debug!("Delete Kafka resource");
        DeleteResponse::default()
    }
}
