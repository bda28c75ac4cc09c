//! # Configuration Validation
//!
//! Checks a configuration object against an attribute tree: value types,
//! required and unknown arguments, read-only attributes and validators.
//! `null` means "not set" for every attribute.

use serde_json::{Map, Value};

use super::{Attribute, AttributeType};
use crate::diagnostics::{AttributePath, Diagnostics};

/// Validate a configuration object against the given attributes
#[must_use]
pub fn validate(attributes: &[Attribute], config: &Value) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    match config {
        Value::Object(object) => {
            validate_object(attributes, object, &AttributePath::root(), &mut diagnostics);
        }
        _ => diagnostics.add_error(
            "Invalid resource configuration",
            format!("Resource configuration must be an object, got: {}", kind_of(config)),
        ),
    }
    diagnostics
}

fn validate_object(
    attributes: &[Attribute],
    object: &Map<String, Value>,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    for key in object.keys() {
        if !attributes.iter().any(|a| &a.name == key) {
            diagnostics.add_attribute_error(
                &path.attribute(key.as_str()),
                "Unsupported argument",
                format!("An argument named \"{key}\" is not expected here."),
            );
        }
    }

    for attribute in attributes {
        let child = path.attribute(attribute.name.as_str());
        match object.get(&attribute.name).filter(|v| !v.is_null()) {
            None if attribute.required => diagnostics.add_attribute_error(
                &child,
                "Missing required argument",
                format!(
                    "The argument \"{}\" is required, but no definition was found.",
                    attribute.name
                ),
            ),
            None => {}
            Some(_) if attribute.is_read_only() => diagnostics.add_attribute_error(
                &child,
                "Invalid Configuration for Read-Only Attribute",
                format!(
                    "Cannot set value for this attribute as the provider has marked it as read-only. Remove the configuration line setting the value.\n\nRefer to the provider documentation or contact the provider developers for additional information about configurable and read-only attributes that are supported.\n\nAttribute: {child}"
                ),
            ),
            Some(value) => validate_attribute(attribute, value, &child, diagnostics),
        }
    }
}

fn validate_attribute(
    attribute: &Attribute,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    let before = diagnostics.len();
    validate_value(&attribute.r#type, &attribute.name, value, path, diagnostics);
    if diagnostics.len() > before {
        return;
    }
    for validator in &attribute.validators {
        validator.validate(path, value, diagnostics);
    }
}

fn validate_value(
    r#type: &AttributeType,
    name: &str,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    let matches = match r#type {
        AttributeType::String => value.is_string(),
        AttributeType::Int64 => is_int64(value),
        AttributeType::Float64 => value.is_number(),
        AttributeType::Bool => value.is_boolean(),
        AttributeType::Dynamic => true,
        AttributeType::List { .. } | AttributeType::ListNested { .. } => value.is_array(),
        AttributeType::Map { .. } | AttributeType::SingleNested { .. } => value.is_object(),
    };
    if !matches {
        diagnostics.add_attribute_error(
            path,
            "Incorrect attribute value type",
            format!(
                "Inappropriate value for attribute \"{name}\": {} required, got: {}.",
                r#type.friendly_name(),
                kind_of(value)
            ),
        );
        return;
    }

    match (r#type, value) {
        (AttributeType::List { element }, Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                validate_element(element, name, item, &path.index(i), diagnostics);
            }
        }
        (AttributeType::Map { element }, Value::Object(entries)) => {
            for (key, item) in entries {
                validate_element(element, name, item, &path.key(key.as_str()), diagnostics);
            }
        }
        (AttributeType::SingleNested { attributes }, Value::Object(object)) => {
            validate_object(attributes, object, path, diagnostics);
        }
        (AttributeType::ListNested { attributes }, Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                let element_path = path.index(i);
                match item {
                    Value::Object(object) => {
                        validate_object(attributes, object, &element_path, diagnostics);
                    }
                    _ => diagnostics.add_attribute_error(
                        &element_path,
                        "Incorrect attribute value type",
                        format!(
                            "Inappropriate value for attribute \"{name}\": element {i}: object required, got: {}.",
                            kind_of(item)
                        ),
                    ),
                }
            }
        }
        _ => {}
    }
}

/// Collection elements may not be null
fn validate_element(
    element: &AttributeType,
    name: &str,
    item: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    if item.is_null() && *element != AttributeType::Dynamic {
        diagnostics.add_attribute_error(
            path,
            "Null value not allowed",
            format!("Elements of attribute \"{name}\" must not be null."),
        );
        return;
    }
    validate_value(element, name, item, path, diagnostics);
}

/// Integers, including floats with no fractional part inside the i64 range
fn is_int64(value: &Value) -> bool {
    match value {
        Value::Number(n) if n.is_i64() => true,
        Value::Number(n) if n.is_u64() => false,
        #[allow(
            clippy::cast_precision_loss,
            reason = "range check against the i64 bounds only"
        )]
        Value::Number(n) => n
            .as_f64()
            .is_some_and(|f| f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64),
        _ => false,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Validator;
    use serde_json::json;

    fn attribute(name: &str, r#type: AttributeType, required: bool) -> Attribute {
        Attribute {
            name: name.to_string(),
            wire_name: name.to_string(),
            description: String::new(),
            r#type,
            required,
            optional: !required,
            computed: false,
            validators: Vec::new(),
        }
    }

    fn listener_schema() -> Vec<Attribute> {
        let mut port = attribute("port", AttributeType::Int64, true);
        port.validators.push(Validator::AtLeast(9092.into()));
        vec![
            attribute("id", AttributeType::String, false),
            attribute(
                "listeners",
                AttributeType::ListNested {
                    attributes: vec![attribute("name", AttributeType::String, true), port],
                },
                true,
            ),
        ]
        .into_iter()
        .map(|mut a| {
            if a.name == "id" {
                a.optional = false;
                a.computed = true;
            }
            a
        })
        .collect()
    }

    #[test]
    fn test_valid_config_has_no_diagnostics() {
        let config = json!({"listeners": [{"name": "plain", "port": 9092}]});
        assert!(validate(&listener_schema(), &config).is_empty());
    }

    #[test]
    fn test_missing_required_argument() {
        let diagnostics = validate(&listener_schema(), &json!({"listeners": null}));
        let diagnostic = diagnostics.iter().next().expect("Should report missing listeners");
        assert_eq!(diagnostic.summary, "Missing required argument");
        assert_eq!(
            diagnostic.attribute.as_ref().map(ToString::to_string).as_deref(),
            Some("listeners")
        );
    }

    #[test]
    fn test_unsupported_argument() {
        let config = json!({"listeners": [{"name": "plain", "port": 9092, "tls": true}]});
        let diagnostics = validate(&listener_schema(), &config);
        assert_eq!(diagnostics.len(), 1);
        let diagnostic = diagnostics.iter().next().expect("Should have diagnostic");
        assert_eq!(diagnostic.summary, "Unsupported argument");
        assert_eq!(
            diagnostic.attribute.as_ref().map(ToString::to_string).as_deref(),
            Some("listeners[0].tls")
        );
    }

    #[test]
    fn test_type_mismatch_skips_validators() {
        let config = json!({"listeners": [{"name": "plain", "port": "9092"}]});
        let diagnostics = validate(&listener_schema(), &config);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics.iter().next().map(|d| d.summary.as_str()),
            Some("Incorrect attribute value type")
        );
    }

    #[test]
    fn test_validator_path() {
        let config = json!({"listeners": [{"name": "a", "port": 9092}, {"name": "b", "port": 80}]});
        let diagnostics = validate(&listener_schema(), &config);
        let diagnostic = diagnostics.iter().next().expect("Should reject port 80");
        assert_eq!(diagnostic.summary, "Invalid Attribute Value");
        assert_eq!(
            diagnostic.detail,
            "Attribute listeners[1].port value must be at least 9092, got: 80"
        );
    }

    #[test]
    fn test_read_only_attribute() {
        let config = json!({"id": "123", "listeners": [{"name": "plain", "port": 9092}]});
        let diagnostics = validate(&listener_schema(), &config);
        assert_eq!(
            diagnostics.iter().next().map(|d| d.summary.as_str()),
            Some("Invalid Configuration for Read-Only Attribute")
        );
    }

    #[test]
    fn test_integral_float_is_int64() {
        assert!(is_int64(&json!(3.0)));
        assert!(!is_int64(&json!(3.5)));
        assert!(!is_int64(&json!(u64::MAX)));
        assert!(is_int64(&json!(-1)));
    }

    #[test]
    fn test_config_must_be_object() {
        assert!(validate(&listener_schema(), &json!([])).has_error());
    }
}
