//! # Kafka Cluster
//!
//! Broker configuration (`spec.kafka`): listeners, authorization, rack
//! awareness and the per-broker pod settings.

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

use super::common::{
    preserve_unknown_fields, JvmOptions, Logging, MetricsConfig, Probe, ResourceRequirements,
};
use super::storage::KafkaStorage;

/// Configuration of the Kafka cluster
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaClusterSpec {
    /// The kafka broker version. Defaults to the latest version. Consult the user documentation to understand the process required to upgrade or downgrade the version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// The KRaft metadata version used by the Kafka cluster. This property is ignored when running in ZooKeeper mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_version: Option<String>,
    /// The number of pods in the cluster.
    #[schemars(range(min = 1))]
    pub replicas: i32,
    /// The docker image for the pods. The default value depends on the configured `Kafka.spec.kafka.version`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Configures listeners of Kafka brokers.
    #[schemars(length(min = 1))]
    pub listeners: Vec<GenericKafkaListener>,
    /// Kafka broker config properties with the following prefixes cannot be set: listeners, advertised., broker., listener., host.name, port, inter.broker.listener.name, sasl., ssl., security., password., log.dir, zookeeper.connect, zookeeper.set.acl, zookeeper.ssl, zookeeper.clientCnxnSocket, authorizer., super.user, cruise.control.metrics.topic, cruise.control.metrics.reporter.bootstrap.servers, node.id, process.roles, controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "preserve_unknown_fields")]
    pub config: Option<serde_json::Map<String, serde_json::Value>>,
    /// Storage configuration (disk). Cannot be updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<KafkaStorage>,
    /// Authorization configuration for Kafka brokers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<KafkaAuthorization>,
    /// Configuration of the `broker.rack` broker config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rack: Option<Rack>,
    /// The image of the init container used for initializing the `broker.rack`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker_rack_init_image: Option<String>,
    /// Pod liveness checking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Probe>,
    /// Pod readiness checking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Probe>,
    /// JVM Options for pods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jvm_options: Option<JvmOptions>,
    /// CPU and memory resources to reserve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    /// Metrics configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics_config: Option<MetricsConfig>,
    /// Logging configuration for Kafka.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<Logging>,
    /// Template for Kafka cluster resources. The template allows users to specify how the Kubernetes resources are generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "preserve_unknown_fields")]
    pub template: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Listener type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum ListenerType {
    #[serde(rename = "internal")]
    Internal,
    #[serde(rename = "route")]
    Route,
    #[serde(rename = "loadbalancer")]
    LoadBalancer,
    #[serde(rename = "nodeport")]
    NodePort,
    #[serde(rename = "ingress")]
    Ingress,
    #[serde(rename = "cluster-ip")]
    ClusterIp,
}

/// Ports taken by the Prometheus and JMX exporters
pub const RESERVED_LISTENER_PORTS: [i32; 2] = [9404, 9999];

fn listener_port(_gen: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "integer",
        "format": "int32",
        "minimum": 9092,
        "not": {"enum": RESERVED_LISTENER_PORTS}
    })
}

/// A broker listener
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenericKafkaListener {
    /// Name of the listener. The name will be used to identify the listener and the related Kubernetes objects. The name has to be unique within given a Kafka cluster. The name can consist of lowercase characters and numbers and be up to 11 characters long.
    #[schemars(regex(pattern = r"^[a-z0-9]{1,11}$"))]
    pub name: String,
    /// Port number used by the listener inside Kafka. The port number has to be unique within a given Kafka cluster. Allowed port numbers are 9092 and higher with the exception of ports 9404 and 9999, which are already used for Prometheus and JMX. Depending on the listener type, the port number might not be the same as the port number that connects Kafka clients.
    #[schemars(schema_with = "listener_port")]
    pub port: i32,
    /// Type of the listener. The supported types are as follows: internal, route, loadbalancer, nodeport, ingress, cluster-ip.
    pub r#type: ListenerType,
    /// Enables TLS encryption on the listener. This is a required property.
    pub tls: bool,
    /// Authentication configuration for this listener.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<ListenerAuthentication>,
    /// Additional listener configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ListenerConfiguration>,
}

/// Client authentication mechanism of a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ListenerAuthenticationType {
    Tls,
    #[serde(rename = "scram-sha-512")]
    ScramSha512,
    Oauth,
    Custom,
}

/// Listener authentication
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListenerAuthentication {
    /// Authentication type. `oauth` type uses SASL OAUTHBEARER Authentication. `scram-sha-512` type uses SASL SCRAM-SHA-512 Authentication. `tls` type uses TLS Client Authentication. `tls` type is supported only on TLS listeners. `custom` type allows for any authentication type to be used.
    pub r#type: ListenerAuthenticationType,
    /// Enable or disable SASL on this listener (custom authentication only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sasl: Option<bool>,
}

/// Policy for routing external traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum ExternalTrafficPolicy {
    Local,
    Cluster,
}

/// Node address type preferred for node ports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum NodeAddressType {
    #[serde(rename = "ExternalDNS")]
    ExternalDns,
    #[serde(rename = "ExternalIP")]
    ExternalIp,
    Hostname,
    #[serde(rename = "InternalDNS")]
    InternalDns,
    #[serde(rename = "InternalIP")]
    InternalIp,
}

/// Additional listener configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListenerConfiguration {
    /// Bootstrap configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrap: Option<ListenerBootstrap>,
    /// Per-broker configurations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brokers: Option<Vec<ListenerBroker>>,
    /// Configures a specific class for `Ingress` and `LoadBalancer` that defines which controller will be used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Specifies whether the service routes external traffic to node-local or cluster-wide endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_traffic_policy: Option<ExternalTrafficPolicy>,
    /// Defines which address type should be used as the node address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_node_port_address_type: Option<NodeAddressType>,
    /// Configures whether the Kubernetes service DNS domain should be used or not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_service_dns_domain: Option<bool>,
    /// The maximum number of connections we allow for this listener in the broker at any time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0))]
    pub max_connections: Option<i32>,
}

/// Bootstrap service overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListenerBootstrap {
    /// Additional alternative names for the bootstrap service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_names: Option<Vec<String>>,
    /// The bootstrap host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Node port for the bootstrap service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_port: Option<i32>,
    /// The loadbalancer is requested with the IP address specified in this field.
    #[serde(default, rename = "loadBalancerIP", skip_serializing_if = "Option::is_none")]
    pub load_balancer_ip: Option<String>,
}

/// Per-broker listener overrides
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListenerBroker {
    /// ID of the kafka broker (broker identifier). Broker IDs start from 0 and correspond to the number of broker replicas.
    pub broker: i32,
    /// The host name used in the brokers' `advertised.listeners`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertised_host: Option<String>,
    /// The port number used in the brokers' `advertised.listeners`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertised_port: Option<i32>,
    /// The broker host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Node port for the per-broker service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_port: Option<i32>,
    /// The loadbalancer is requested with the IP address specified in this field.
    #[serde(default, rename = "loadBalancerIP", skip_serializing_if = "Option::is_none")]
    pub load_balancer_ip: Option<String>,
}

/// Authorization implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuthorizationType {
    Simple,
    Opa,
    Keycloak,
    Custom,
}

/// Broker authorization
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaAuthorization {
    /// Authorization type. Currently, the supported types are `simple`, `keycloak`, `opa` and `custom`.
    pub r#type: AuthorizationType,
    /// List of super users. Should contain list of user principals which should get unlimited access rights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_users: Option<Vec<String>>,
}

/// Rack awareness
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rack {
    /// A key that matches labels assigned to the Kubernetes cluster nodes. The value of the label is used to set a broker's `broker.rack` config, and the `client.rack` config for Kafka Connect or MirrorMaker 2.
    pub topology_key: String,
}
