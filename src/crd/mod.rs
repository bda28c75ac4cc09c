//! # Custom Resource Definitions
//!
//! Typed model of the Strimzi `Kafka` CRD (`kafka.strimzi.io/v1beta2`).
//!
//! These structs are the only description of the resource shape. The
//! provider's attribute schema is derived from their JSON schema and the
//! rendered YAML comes from their serde representation.
//!
//! ## Module Structure
//!
//! - `kafka.rs` - `Kafka` resource, spec root and manifest metadata
//! - `cluster.rs` - Kafka brokers: listeners, authorization, rack
//! - `zookeeper.rs` - ZooKeeper ensemble
//! - `storage.rs` - Ephemeral, persistent-claim and JBOD storage
//! - `operators.rs` - Entity Operator, Cruise Control, Kafka Exporter
//! - `ca.rs` - Cluster and clients certificate authorities
//! - `common.rs` - Probes, JVM options, logging, metrics, resources

mod ca;
mod cluster;
mod common;
mod kafka;
mod operators;
mod storage;
mod zookeeper;

// Re-export all public types
pub use ca::{CertificateAuthority, CertificateExpirationPolicy};
pub use cluster::{
    AuthorizationType, ExternalTrafficPolicy, GenericKafkaListener, KafkaAuthorization,
    KafkaClusterSpec, ListenerAuthentication, ListenerAuthenticationType, ListenerBootstrap,
    ListenerBroker, ListenerConfiguration, ListenerType, NodeAddressType, Rack,
    RESERVED_LISTENER_PORTS,
};
pub use common::{
    ConfigMapKeySelector, ExternalValueSource, JvmOptions, Logging, LoggingType, MetricsConfig,
    MetricsConfigType, Probe, ResourceRequirements, SystemProperty,
};
pub use kafka::{crd_yaml, Kafka, KafkaManifest, KafkaSpec, ManifestMetadata};
pub use operators::{
    BrokerCapacity, CruiseControlSpec, EntityOperatorSpec, EntityTopicOperatorSpec,
    EntityUserOperatorSpec, KafkaExporterSpec, TlsSidecar, TlsSidecarLogLevel,
};
pub use storage::{KafkaStorage, SingleVolumeStorage, StorageType, VolumeType, ZookeeperStorage};
pub use zookeeper::ZookeeperClusterSpec;
