//! # Wire Translation
//!
//! Maps a configuration keyed by attribute names onto the manifest shape
//! keyed by CRD field names. Unset (`null`) and read-only attributes are
//! dropped. Map keys and `Dynamic` values are copied verbatim.

use serde_json::{Map, Number, Value};

use super::{Attribute, AttributeType};

/// Translate a configuration object to its wire representation
///
/// Expects a configuration that passed [`validate`](super::validate);
/// values of unexpected shape are copied unchanged.
#[must_use]
pub fn to_wire(attributes: &[Attribute], config: &Value) -> Value {
    match config {
        Value::Object(object) => Value::Object(object_to_wire(attributes, object)),
        other => other.clone(),
    }
}

fn object_to_wire(attributes: &[Attribute], object: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();
    for attribute in attributes.iter().filter(|a| !a.is_read_only()) {
        if let Some(value) = object.get(&attribute.name).filter(|v| !v.is_null()) {
            out.insert(
                attribute.wire_name.clone(),
                value_to_wire(&attribute.r#type, value),
            );
        }
    }
    out
}

fn value_to_wire(r#type: &AttributeType, value: &Value) -> Value {
    match (r#type, value) {
        (AttributeType::SingleNested { attributes }, Value::Object(object)) => {
            Value::Object(object_to_wire(attributes, object))
        }
        (AttributeType::ListNested { attributes }, Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::Object(object) => Value::Object(object_to_wire(attributes, object)),
                    other => other.clone(),
                })
                .collect(),
        ),
        (AttributeType::List { element }, Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| value_to_wire(element, item))
                .collect(),
        ),
        (AttributeType::Map { element }, Value::Object(entries)) => Value::Object(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), value_to_wire(element, item)))
                .collect(),
        ),
        (AttributeType::Int64, Value::Number(n)) => Value::Number(integral(n)),
        _ => value.clone(),
    }
}

/// `3.0` becomes `3` so the typed model accepts it as an integer
fn integral(n: &Number) -> Number {
    if n.is_i64() || n.is_u64() {
        return n.clone();
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "validated to be integral and inside the i64 range"
    )]
    let normalized = n
        .as_f64()
        .filter(|f| f.fract() == 0.0)
        .map_or_else(|| n.clone(), |f| Number::from(f as i64));
    normalized
}
