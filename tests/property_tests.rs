// Test code is allowed to panic on failure
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

//! Property-based tests for strimzi-kafka-provider.
//!
//! Uses proptest to generate random inputs and verify invariants.

use proptest::prelude::*;
use serde_json::{json, Value};

use strimzi_kafka_provider::crd::RESERVED_LISTENER_PORTS;
use strimzi_kafka_provider::provider::{kafka_schema, IdGenerator, Provider};
use strimzi_kafka_provider::schema::to_tf_name;

const RESOURCE_TYPE: &str = "k8s_kafka_strimzi_io_kafka_v1beta2";

/// Strategy for generating valid listener names (`^[a-z0-9]{1,11}$`).
fn listener_name() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,11}"
}

/// Strategy for generating valid RFC 1123 resource names.
fn resource_name() -> impl Strategy<Value = String> {
    "[a-z]([-a-z0-9]{0,30}[a-z0-9])?"
}

/// Strategy for generating listener types.
fn listener_type() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("internal"),
        Just("route"),
        Just("loadbalancer"),
        Just("nodeport"),
        Just("ingress"),
        Just("cluster-ip"),
    ]
}

fn config(name: &str, replicas: i64, listener: &str, port: i64, kind: &str) -> Value {
    json!({
        "metadata": {"name": name},
        "spec": {
            "kafka": {
                "replicas": replicas,
                "listeners": [{"name": listener, "port": port, "type": kind, "tls": false}]
            }
        }
    })
}

proptest! {
    /// IDs handed out by one generator never repeat and never go backwards.
    #[test]
    fn ids_strictly_increase(count in 2usize..200) {
        let ids = IdGenerator::new();
        let values: Vec<i64> = (0..count).map(|_| ids.next_value()).collect();
        for pair in values.windows(2) {
            prop_assert!(pair[1] > pair[0], "{} is not after {}", pair[1], pair[0]);
        }
    }

    /// Any configuration inside the CRD bounds renders, and the manifest
    /// carries the configured values.
    #[test]
    fn valid_configs_render(
        name in resource_name(),
        replicas in 1i64..100,
        listener in listener_name(),
        port in 9092i64..65535,
        kind in listener_type(),
    ) {
        prop_assume!(!RESERVED_LISTENER_PORTS.iter().any(|&p| i64::from(p) == port));
        let provider = Provider::default();
        let rendered = provider
            .render(RESOURCE_TYPE, config(&name, replicas, &listener, port, kind))
            .expect("Valid configuration should render");

        let manifest: Value = serde_yaml::from_str(&rendered.yaml).unwrap();
        prop_assert_eq!(&manifest["metadata"]["name"], &json!(name));
        prop_assert_eq!(&manifest["spec"]["kafka"]["replicas"], &json!(replicas));
        prop_assert_eq!(&manifest["spec"]["kafka"]["listeners"][0]["port"], &json!(port));
        prop_assert_eq!(&manifest["spec"]["kafka"]["listeners"][0]["type"], &json!(kind));
    }

    /// Ports below the first Kafka listener port are always rejected at the
    /// listener's attribute path.
    #[test]
    fn low_ports_are_rejected(port in 0i64..9092) {
        let diagnostics = kafka_schema()
            .validate(&config("c", 1, "plain", port, "internal"));
        prop_assert_eq!(diagnostics.errors().count(), 1);
        let error = diagnostics.errors().next().unwrap();
        prop_assert_eq!(
            error.attribute.as_ref().map(ToString::to_string),
            Some("spec.kafka.listeners[0].port".to_string())
        );
    }

    /// Unknown listener types never pass validation.
    #[test]
    fn unknown_listener_types_are_rejected(kind in "[a-z]{1,12}") {
        prop_assume!(!["internal", "route", "loadbalancer", "nodeport", "ingress"].contains(&kind.as_str()));
        let diagnostics = kafka_schema()
            .validate(&config("c", 1, "plain", 9092, &kind));
        prop_assert!(diagnostics.has_error());
    }

    /// Attribute names are snake_case and idempotent under conversion.
    #[test]
    fn tf_names_are_stable(name in "[a-zA-Z][a-zA-Z0-9]{0,24}") {
        let once = to_tf_name(&name);
        prop_assert!(once.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        prop_assert!(!once.starts_with('_') && !once.ends_with('_'));
        prop_assert_eq!(to_tf_name(&once), once.clone());
    }
}
