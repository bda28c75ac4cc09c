//! # Kafka Resource
//!
//! The `Kafka` custom resource (`kafka.strimzi.io/v1beta2`) and the manifest
//! shape that the provider renders.

use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{CustomResource, CustomResourceExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ca::CertificateAuthority;
use super::cluster::KafkaClusterSpec;
use super::operators::{CruiseControlSpec, EntityOperatorSpec, KafkaExporterSpec};
use super::zookeeper::ZookeeperClusterSpec;

/// Kafka custom resource specification
///
/// The `spec` of a Strimzi `Kafka` object. `zookeeper` is optional so that
/// KRaft clusters can be described as well.
#[derive(CustomResource, Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "kafka.strimzi.io",
    version = "v1beta2",
    kind = "Kafka",
    plural = "kafkas",
    shortname = "k",
    namespaced,
    printcolumn = r#"{"name":"Desired Kafka replicas", "type":"integer", "jsonPath":".spec.kafka.replicas"}, {"name":"Desired ZK replicas", "type":"integer", "jsonPath":".spec.zookeeper.replicas"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct KafkaSpec {
    /// Configuration of the Kafka cluster.
    pub kafka: KafkaClusterSpec,
    /// Configuration of the ZooKeeper cluster. This section is required when running a ZooKeeper-based Apache Kafka cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zookeeper: Option<ZookeeperClusterSpec>,
    /// Configuration of the Entity Operator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_operator: Option<EntityOperatorSpec>,
    /// Configuration of the cluster certificate authority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_ca: Option<CertificateAuthority>,
    /// Configuration of the clients certificate authority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clients_ca: Option<CertificateAuthority>,
    /// Configuration for Cruise Control deployment. Deploys a Cruise Control instance when specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cruise_control: Option<CruiseControlSpec>,
    /// Configuration of the Kafka Exporter. Kafka Exporter can provide additional metrics, for example lag of consumer group at topic/partition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kafka_exporter: Option<KafkaExporterSpec>,
    /// A list of time windows for maintenance tasks (that is, certificates renewal). Each time window is defined by a cron expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_time_windows: Option<Vec<String>>,
}

/// Object metadata accepted by the provider
///
/// Only the user-settable subset of `ObjectMeta`; server-populated fields
/// have no meaning for a rendered manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManifestMetadata {
    /// Unique identifier for this object within the namespace (RFC 1123 subdomain).
    #[schemars(length(min = 1, max = 253))]
    #[schemars(regex(
        pattern = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$"
    ))]
    pub name: String,
    /// Namespace the object lives in (RFC 1123 label).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1, max = 63))]
    #[schemars(regex(pattern = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$"))]
    pub namespace: Option<String>,
    /// Map of string keys and values that can be used to organize and categorize objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    /// Unstructured key value map stored with the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl From<ManifestMetadata> for ObjectMeta {
    fn from(metadata: ManifestMetadata) -> Self {
        ObjectMeta {
            name: Some(metadata.name),
            namespace: metadata.namespace,
            labels: metadata.labels,
            annotations: metadata.annotations,
            ..ObjectMeta::default()
        }
    }
}

/// The configurable part of a `Kafka` manifest
///
/// `apiVersion` and `kind` are not part of this shape; they are stamped when
/// the manifest is turned into a [`Kafka`] object.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaManifest {
    /// Standard object metadata.
    pub metadata: ManifestMetadata,
    /// Desired state of the Kafka cluster.
    pub spec: KafkaSpec,
}

impl KafkaManifest {
    /// Build the Kubernetes object, with GVK taken from the resource type.
    #[must_use]
    pub fn into_resource(self) -> Kafka {
        Kafka {
            metadata: self.metadata.into(),
            spec: self.spec,
        }
    }
}

/// Render the `Kafka` CustomResourceDefinition as YAML.
///
/// # Errors
///
/// Returns an error if the CRD cannot be serialized.
pub fn crd_yaml() -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&Kafka::crd())
}
