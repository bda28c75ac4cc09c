//! # Schema Tests
//!
//! Tests for the attribute schema derived from the `Kafka` CRD model and
//! for the configuration to manifest translation.

use serde_json::json;
use strimzi_kafka_provider::provider::{kafka_schema, Provider};
use strimzi_kafka_provider::schema::{to_tf_name, AttributeType, Validator};

#[test]
fn test_attribute_names_are_snake_case() {
    fn check(attributes: &[strimzi_kafka_provider::schema::Attribute], path: &str) {
        for attribute in attributes {
            let full = format!("{path}{}", attribute.name);
            assert!(
                attribute
                    .name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "attribute {full} is not snake_case"
            );
            if let Some(children) = attribute.r#type.nested_attributes() {
                check(children, &format!("{full}."));
            }
        }
    }
    check(&kafka_schema().attributes, "");
}

#[test]
fn test_wire_names_follow_crd() {
    let schema = kafka_schema();
    let cases = [
        ("spec.entity_operator", "entityOperator"),
        ("spec.cluster_ca.validity_days", "validityDays"),
        ("spec.kafka.listeners.configuration.bootstrap.load_balancer_ip", "loadBalancerIP"),
        ("spec.kafka.jvm_options.xmx", "-Xmx"),
        ("spec.kafka.jvm_options.xx", "-XX"),
        ("spec.kafka_exporter.enable_sarama_logging", "enableSaramaLogging"),
        ("spec.maintenance_time_windows", "maintenanceTimeWindows"),
    ];
    for (path, wire_name) in cases {
        let attribute = schema
            .attribute(path)
            .unwrap_or_else(|| panic!("Missing attribute {path}"));
        assert_eq!(attribute.wire_name, wire_name, "wire name of {path}");
    }
}

#[test]
fn test_types_follow_model() {
    let schema = kafka_schema();

    assert!(matches!(
        schema.attribute("spec.kafka.listeners").map(|a| &a.r#type),
        Some(AttributeType::ListNested { .. })
    ));
    assert!(matches!(
        schema.attribute("spec.kafka").map(|a| &a.r#type),
        Some(AttributeType::SingleNested { .. })
    ));
    assert_eq!(
        schema.attribute("metadata.labels").map(|a| &a.r#type),
        Some(&AttributeType::Map {
            element: Box::new(AttributeType::String)
        })
    );
    assert_eq!(
        schema
            .attribute("spec.maintenance_time_windows")
            .map(|a| &a.r#type),
        Some(&AttributeType::List {
            element: Box::new(AttributeType::String)
        })
    );
    assert_eq!(
        schema.attribute("spec.kafka.listeners.tls").map(|a| &a.r#type),
        Some(&AttributeType::Bool)
    );
    assert_eq!(
        schema.attribute("spec.zookeeper.template").map(|a| &a.r#type),
        Some(&AttributeType::Map {
            element: Box::new(AttributeType::Dynamic)
        })
    );
}

#[test]
fn test_required_and_optional_flags() {
    let schema = kafka_schema();
    for path in [
        "metadata",
        "metadata.name",
        "spec",
        "spec.kafka",
        "spec.kafka.replicas",
        "spec.kafka.listeners",
        "spec.kafka.listeners.name",
        "spec.kafka.listeners.port",
        "spec.kafka.listeners.type",
        "spec.kafka.listeners.tls",
        "spec.zookeeper.storage",
    ] {
        let attribute = schema
            .attribute(path)
            .unwrap_or_else(|| panic!("Missing attribute {path}"));
        assert!(attribute.required && !attribute.optional, "{path} should be required");
    }
    for path in ["metadata.namespace", "spec.zookeeper", "spec.kafka.image"] {
        let attribute = schema
            .attribute(path)
            .unwrap_or_else(|| panic!("Missing attribute {path}"));
        assert!(attribute.optional && !attribute.required, "{path} should be optional");
    }
}

#[test]
fn test_validators_follow_model() {
    let schema = kafka_schema();
    let validators = |path: &str| {
        schema
            .attribute(path)
            .unwrap_or_else(|| panic!("Missing attribute {path}"))
            .validators
            .clone()
    };

    assert!(validators("spec.kafka.replicas").contains(&Validator::AtLeast(1.into())));
    assert!(validators("spec.kafka.listeners.port").contains(&Validator::AtLeast(9092.into())));
    assert!(validators("spec.kafka.listeners.port")
        .contains(&Validator::NoneOf(vec![json!(9404), json!(9999)])));
    assert!(validators("spec.kafka.replicas").contains(&Validator::AtMost(i32::MAX.into())));
    assert!(validators("spec.kafka.listeners").contains(&Validator::SizeAtLeast(1)));

    let listener_types = validators("spec.kafka.listeners.type");
    assert_eq!(
        listener_types,
        vec![Validator::OneOf(
            ["internal", "route", "loadbalancer", "nodeport", "ingress", "cluster-ip"]
                .into_iter()
                .map(String::from)
                .collect()
        )]
    );

    let storage_types = validators("spec.kafka.storage.type");
    assert_eq!(
        storage_types,
        vec![Validator::OneOf(
            ["ephemeral", "persistent-claim", "jbod"]
                .into_iter()
                .map(String::from)
                .collect()
        )]
    );

    let name = validators("metadata.name");
    assert!(name.contains(&Validator::LengthAtLeast(1)));
    assert!(name.contains(&Validator::LengthAtMost(253)));
    assert!(name
        .iter()
        .any(|v| matches!(v, Validator::RegexMatches(_))));
}

#[test]
fn test_schema_serializes_for_documentation() {
    let provider = Provider::default();
    let schemas = provider.schemas();
    let schema = schemas
        .get("k8s_kafka_strimzi_io_kafka_v1beta2")
        .expect("Kafka schema should be registered");
    let value = serde_json::to_value(schema).expect("Should serialize schema");

    assert_eq!(value["version"], 0);
    let id = value["attributes"]
        .as_array()
        .and_then(|attributes| attributes.iter().find(|a| a["name"] == "id"))
        .expect("Should list id");
    assert_eq!(id["computed"], true);
    assert_eq!(id["type"]["kind"], "string");
}

#[test]
fn test_to_tf_name() {
    let cases = [
        ("replicas", "replicas"),
        ("entityOperator", "entity_operator"),
        ("loadBalancerIP", "load_balancer_ip"),
        ("preferredNodePortAddressType", "preferred_node_port_address_type"),
        ("-Xms", "xms"),
        ("-XX", "xx"),
        ("gcLoggingEnabled", "gc_logging_enabled"),
    ];
    for (input, expected) in cases {
        assert_eq!(to_tf_name(input), expected, "to_tf_name({input})");
    }
}

#[test]
fn test_to_wire_maps_names_and_drops_nulls() {
    let schema = kafka_schema();
    let config = json!({
        "metadata": {"name": "c", "labels": {"app.kubernetes.io/name": "kafka"}},
        "spec": {
            "kafka": {
                "replicas": 3.0,
                "image": null,
                "listeners": [
                    {
                        "name": "plain", "port": 9092, "type": "internal", "tls": false,
                        "configuration": {"bootstrap": {"load_balancer_ip": "1.2.3.4"}}
                    }
                ],
                "config": {"log.retention.hours": 168, "some_snake_key": true}
            },
            "entity_operator": {"topic_operator": {}}
        }
    });

    let wire = schema.to_wire(&config);
    let expected = json!({
        "metadata": {"name": "c", "labels": {"app.kubernetes.io/name": "kafka"}},
        "spec": {
            "kafka": {
                "replicas": 3,
                "listeners": [
                    {
                        "name": "plain", "port": 9092, "type": "internal", "tls": false,
                        "configuration": {"bootstrap": {"loadBalancerIP": "1.2.3.4"}}
                    }
                ],
                "config": {"log.retention.hours": 168, "some_snake_key": true}
            },
            "entityOperator": {"topicOperator": {}}
        }
    });
    assert_eq!(wire, expected);
}

#[test]
fn test_to_wire_drops_computed_attributes() {
    let schema = kafka_schema();
    let state = json!({
        "id": "1700000000000000000",
        "api_version": "kafka.strimzi.io/v1beta2",
        "kind": "Kafka",
        "yaml": "kind: Kafka\n",
        "metadata": {"name": "c"},
    });
    let wire = schema.to_wire(&state);
    assert_eq!(wire, json!({"metadata": {"name": "c"}}));
}
