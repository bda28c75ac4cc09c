//! # Validation Tests
//!
//! Tests for configuration validation of the `Kafka` v1beta2 resource.
//!
//! These tests verify:
//! - Required and unsupported arguments
//! - Value types, including nested blocks and collections
//! - Enum, range, length and pattern validators taken from the CRD model
//! - Read-only (computed) attributes
//! - Attribute paths reported in diagnostics

use serde_json::{json, Value};
use strimzi_kafka_provider::diagnostics::{Diagnostic, Diagnostics};
use strimzi_kafka_provider::provider::{kafka_schema, CreateRequest, KafkaV1beta2Resource, Resource};

fn valid_config() -> Value {
    json!({
        "metadata": {"name": "my-cluster", "namespace": "kafka"},
        "spec": {
            "kafka": {
                "replicas": 3,
                "listeners": [
                    {"name": "plain", "port": 9092, "type": "internal", "tls": false},
                    {"name": "tls", "port": 9093, "type": "internal", "tls": true}
                ]
            },
            "zookeeper": {
                "replicas": 3,
                "storage": {"type": "ephemeral"}
            }
        }
    })
}

fn validate(config: &Value) -> Diagnostics {
    kafka_schema().validate(config)
}

fn error_at<'a>(diagnostics: &'a Diagnostics, path: &str) -> &'a Diagnostic {
    diagnostics
        .errors()
        .find(|d| d.attribute.as_ref().is_some_and(|p| p.to_string() == path))
        .unwrap_or_else(|| panic!("Expected an error at {path}, got:\n{diagnostics}"))
}

#[test]
fn test_valid_config_has_no_diagnostics() {
    let diagnostics = validate(&valid_config());
    assert!(diagnostics.is_empty(), "{diagnostics}");
}

#[test]
fn test_missing_required_arguments() {
    let diagnostics = validate(&json!({"metadata": {"name": "x"}}));
    let error = error_at(&diagnostics, "spec");
    assert_eq!(error.summary, "Missing required argument");

    let mut config = valid_config();
    config["spec"]["kafka"]["listeners"][0]
        .as_object_mut()
        .expect("listener is an object")
        .remove("port");
    let diagnostics = validate(&config);
    let error = error_at(&diagnostics, "spec.kafka.listeners[0].port");
    assert_eq!(error.summary, "Missing required argument");
}

#[test]
fn test_null_required_argument_is_missing() {
    let mut config = valid_config();
    config["metadata"]["name"] = Value::Null;
    let diagnostics = validate(&config);
    assert_eq!(
        error_at(&diagnostics, "metadata.name").summary,
        "Missing required argument"
    );
}

#[test]
fn test_unsupported_argument() {
    let mut config = valid_config();
    config["spec"]["kafka"]["brokers"] = json!(3);
    let diagnostics = validate(&config);
    let error = error_at(&diagnostics, "spec.kafka.brokers");
    assert_eq!(error.summary, "Unsupported argument");
}

#[test]
fn test_camel_case_names_are_not_attributes() {
    let mut config = valid_config();
    config["spec"]["entityOperator"] = json!({});
    let diagnostics = validate(&config);
    assert_eq!(
        error_at(&diagnostics, "spec.entityOperator").summary,
        "Unsupported argument"
    );
}

#[test]
fn test_incorrect_value_types() {
    let mut config = valid_config();
    config["spec"]["kafka"]["replicas"] = json!("three");
    config["spec"]["kafka"]["listeners"][1]["tls"] = json!("yes");
    config["metadata"]["labels"] = json!({"app": 1});

    let diagnostics = validate(&config);
    for path in [
        "spec.kafka.replicas",
        "spec.kafka.listeners[1].tls",
        "metadata.labels[\"app\"]",
    ] {
        assert_eq!(
            error_at(&diagnostics, path).summary,
            "Incorrect attribute value type"
        );
    }
}

#[test]
fn test_fractional_number_is_not_an_integer() {
    let mut config = valid_config();
    config["spec"]["kafka"]["replicas"] = json!(2.5);
    let diagnostics = validate(&config);
    assert_eq!(
        error_at(&diagnostics, "spec.kafka.replicas").summary,
        "Incorrect attribute value type"
    );

    config["spec"]["kafka"]["replicas"] = json!(3.0);
    assert!(validate(&config).is_empty());
}

#[test]
fn test_listener_type_must_be_known() {
    let mut config = valid_config();
    config["spec"]["kafka"]["listeners"][0]["type"] = json!("external");
    let diagnostics = validate(&config);

    let error = error_at(&diagnostics, "spec.kafka.listeners[0].type");
    assert_eq!(error.summary, "Invalid Attribute Value Match");
    assert!(error.detail.contains("\"internal\""), "{}", error.detail);
    assert!(error.detail.contains("\"cluster-ip\""), "{}", error.detail);
    assert!(error.detail.ends_with("got: \"external\""), "{}", error.detail);
}

#[test]
fn test_minimum_bounds() {
    let mut config = valid_config();
    config["spec"]["kafka"]["replicas"] = json!(0);
    config["spec"]["kafka"]["listeners"][0]["port"] = json!(80);
    config["spec"]["zookeeper"]["replicas"] = json!(0);

    let diagnostics = validate(&config);
    let replicas = error_at(&diagnostics, "spec.kafka.replicas");
    assert_eq!(replicas.summary, "Invalid Attribute Value");
    assert_eq!(
        replicas.detail,
        "Attribute spec.kafka.replicas value must be at least 1, got: 0"
    );

    let port = error_at(&diagnostics, "spec.kafka.listeners[0].port");
    assert_eq!(
        port.detail,
        "Attribute spec.kafka.listeners[0].port value must be at least 9092, got: 80"
    );

    error_at(&diagnostics, "spec.zookeeper.replicas");
    assert_eq!(diagnostics.errors().count(), 3);
}

#[test]
fn test_maximum_bound() {
    let mut config = valid_config();
    config["spec"]["cruise_control"] = json!({"broker_capacity": {"cpu_utilization": 101}});
    let diagnostics = validate(&config);
    let error = error_at(
        &diagnostics,
        "spec.cruise_control.broker_capacity.cpu_utilization",
    );
    assert!(error.detail.contains("value must be at most 100"), "{}", error.detail);
}

#[test]
fn test_listener_name_pattern() {
    let mut config = valid_config();
    config["spec"]["kafka"]["listeners"][0]["name"] = json!("Plain-Listener");
    let diagnostics = validate(&config);
    let error = error_at(&diagnostics, "spec.kafka.listeners[0].name");
    assert_eq!(error.summary, "Invalid Attribute Value Match");
    assert!(error.detail.contains("regular expression"), "{}", error.detail);
}

#[test]
fn test_metadata_name_length_and_pattern() {
    let mut config = valid_config();
    config["metadata"]["name"] = json!("");
    let diagnostics = validate(&config);
    assert!(diagnostics
        .errors()
        .any(|d| d.summary == "Invalid Attribute Value Length"));

    config["metadata"]["name"] = json!("My_Cluster");
    let diagnostics = validate(&config);
    assert_eq!(
        error_at(&diagnostics, "metadata.name").summary,
        "Invalid Attribute Value Match"
    );
}

#[test]
fn test_listeners_must_not_be_empty() {
    let mut config = valid_config();
    config["spec"]["kafka"]["listeners"] = json!([]);
    let diagnostics = validate(&config);
    let error = error_at(&diagnostics, "spec.kafka.listeners");
    assert!(
        error.detail.contains("at least 1 elements"),
        "{}",
        error.detail
    );
}

#[test]
fn test_null_list_element_is_rejected() {
    let mut config = valid_config();
    config["spec"]["maintenance_time_windows"] = json!(["* * 0-1 ? * SUN", null]);
    let diagnostics = validate(&config);
    assert_eq!(
        error_at(&diagnostics, "spec.maintenance_time_windows[1]").summary,
        "Null value not allowed"
    );
}

#[test]
fn test_read_only_attributes_cannot_be_set() {
    for attribute in ["id", "api_version", "kind", "yaml"] {
        let mut config = valid_config();
        config[attribute] = json!("set-by-user");
        let diagnostics = validate(&config);
        assert_eq!(
            error_at(&diagnostics, attribute).summary,
            "Invalid Configuration for Read-Only Attribute"
        );
    }
}

#[test]
fn test_free_form_config_accepts_any_keys_and_values() {
    let mut config = valid_config();
    config["spec"]["kafka"]["config"] = json!({
        "auto.create.topics.enable": false,
        "log.retention.hours": 168,
        "ssl.cipher.suites": ["TLS_AES_256_GCM_SHA384"],
    });
    config["spec"]["kafka"]["template"] = json!({"pod": {"metadata": {"labels": {"a": "b"}}}});
    let diagnostics = validate(&config);
    assert!(diagnostics.is_empty(), "{diagnostics}");
}

#[test]
fn test_free_form_config_must_be_an_object() {
    let mut config = valid_config();
    config["spec"]["kafka"]["config"] = json!("oops");
    config["spec"]["zookeeper"]["template"] = json!(["pod"]);
    let diagnostics = validate(&config);

    let error = error_at(&diagnostics, "spec.kafka.config");
    assert_eq!(error.summary, "Incorrect attribute value type");
    assert_eq!(
        error.detail,
        "Inappropriate value for attribute \"config\": map of any value required, got: string."
    );
    let error = error_at(&diagnostics, "spec.zookeeper.template");
    assert_eq!(error.summary, "Incorrect attribute value type");
}

#[test]
fn test_integers_bounded_by_field_width() {
    let mut config = valid_config();
    config["spec"]["kafka"]["replicas"] = json!(3_000_000_000_i64);
    let diagnostics = validate(&config);

    let error = error_at(&diagnostics, "spec.kafka.replicas");
    assert_eq!(error.summary, "Invalid Attribute Value");
    assert_eq!(
        error.detail,
        "Attribute spec.kafka.replicas value must be at most 2147483647, got: 3000000000"
    );
}

#[test]
fn test_reserved_listener_ports_rejected() {
    for port in [9404, 9999] {
        let mut config = valid_config();
        config["spec"]["kafka"]["listeners"][1]["port"] = json!(port);
        let diagnostics = validate(&config);

        let error = error_at(&diagnostics, "spec.kafka.listeners[1].port");
        assert_eq!(error.summary, "Invalid Attribute Value Match");
        assert_eq!(
            error.detail,
            format!(
                "Attribute spec.kafka.listeners[1].port value must be none of: [9404 9999], got: {port}"
            )
        );
    }
}

#[test]
fn test_configs_passing_validation_are_not_rejected_by_create() {
    let cases: [(&str, fn(&mut Value)); 3] = [
        ("replicas", |c| c["spec"]["kafka"]["replicas"] = json!(3_000_000_000_i64)),
        ("config", |c| c["spec"]["kafka"]["config"] = json!("oops")),
        ("template", |c| c["spec"]["kafka"]["template"] = json!([1, 2])),
    ];
    for (name, mutate) in cases {
        let mut config = valid_config();
        mutate(&mut config);

        let diagnostics = validate(&config);
        assert!(diagnostics.has_error(), "{name} should fail validation");

        let response = KafkaV1beta2Resource::new().create(CreateRequest { config });
        assert!(response.state.is_none());
        assert!(
            response
                .diagnostics
                .iter()
                .all(|d| d.summary != "Error decoding configuration"),
            "{name}: {}",
            response.diagnostics
        );
    }
}

#[test]
fn test_non_object_configuration() {
    let diagnostics = validate(&json!(["not", "an", "object"]));
    assert!(diagnostics.has_error());
    assert!(diagnostics.iter().all(|d| d.attribute.is_none()));
}

#[test]
fn test_create_reports_all_errors_at_once() {
    let mut config = valid_config();
    config["spec"]["kafka"]["replicas"] = json!(0);
    config["spec"]["kafka"]["listeners"][0]["type"] = json!("external");
    config["spec"]["unknown"] = json!(true);

    let response = KafkaV1beta2Resource::new().create(CreateRequest { config });
    assert!(response.state.is_none());
    assert_eq!(response.diagnostics.errors().count(), 3);
}
