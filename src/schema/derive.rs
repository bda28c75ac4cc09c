//! # Schema Derivation
//!
//! Converts the JSON schema generated by `schemars` into an attribute tree.
//!
//! The converter accepts the shapes `schemars` emits for Rust types:
//! `$ref` into `$defs`/`definitions`, `Option<T>` as `anyOf` with a `null`
//! branch or as a `["T", "null"]` type array, unit enums as `enum` or as a
//! `oneOf` of `const` values. Keywords on a wrapper (field descriptions,
//! range and pattern attributes) are merged over the referenced schema.

use serde_json::{Map, Number, Value};

use super::{Attribute, AttributeType, Validator};

/// Derive the attributes of an object schema
///
/// `root` is the complete generated schema; it is used to resolve `$ref`
/// pointers. Objects without declared properties become maps, and values
/// that cannot be typed more precisely become [`AttributeType::Dynamic`].
#[must_use]
pub fn derive_attributes(root: &Value) -> Vec<Attribute> {
    let normalized = normalize(root, root);
    object_attributes(root, &normalized)
}

/// Convert a camelCase wire name to a snake_case attribute name
///
/// Acronyms stay together (`loadBalancerIP` becomes `load_balancer_ip`),
/// leading and trailing non-alphanumeric characters are dropped (`-Xms`
/// becomes `xms`) and inner ones become separators.
#[must_use]
pub fn to_tf_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    let mut pending_separator = false;

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            pending_separator = !out.is_empty();
            continue;
        }
        if c.is_ascii_uppercase() && !out.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                pending_separator = true;
            }
        }
        if pending_separator && !out.ends_with('_') {
            out.push('_');
        }
        pending_separator = false;
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Resolve references and nullable wrappers into one flat schema object
fn normalize(root: &Value, schema: &Value) -> Map<String, Value> {
    let mut object = match schema {
        Value::Object(object) => object.clone(),
        _ => return Map::new(),
    };

    if let Some(reference) = object.remove("$ref") {
        let target = reference
            .as_str()
            .and_then(|r| r.strip_prefix('#'))
            .and_then(|pointer| root.pointer(pointer));
        let mut resolved = target.map(|t| normalize(root, t)).unwrap_or_default();
        merge_over(&mut resolved, object);
        return resolved;
    }

    for keyword in ["anyOf", "oneOf", "allOf"] {
        let Some(Value::Array(variants)) = object.get(keyword) else {
            continue;
        };
        let variants: Vec<Value> = variants
            .iter()
            .filter(|v| !is_null_schema(v))
            .cloned()
            .collect();

        if variants.len() == 1 {
            object.remove(keyword);
            let mut inner = normalize(root, &variants[0]);
            merge_over(&mut inner, object);
            return inner;
        }

        let consts: Option<Vec<Value>> = variants
            .iter()
            .map(|v| normalize(root, v))
            .map(|v| match (v.get("const"), v.get("enum")) {
                (Some(c), _) => Some(vec![c.clone()]),
                (None, Some(Value::Array(values))) => Some(values.clone()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(|groups| groups.into_iter().flatten().collect());
        if let Some(values) = consts.filter(|values| !values.is_empty()) {
            object.remove(keyword);
            object.insert("type".to_string(), Value::from("string"));
            object.insert("enum".to_string(), Value::Array(values));
            return object;
        }
    }

    if let Some(Value::Array(types)) = object.get("type") {
        let non_null: Vec<Value> = types.iter().filter(|t| *t != "null").cloned().collect();
        if non_null.len() == 1 {
            object.insert("type".to_string(), non_null[0].clone());
        }
    }
    if let Some(Value::Array(values)) = object.get_mut("enum") {
        values.retain(|v| !v.is_null());
    }
    object
}

fn is_null_schema(schema: &Value) -> bool {
    schema.get("type").is_some_and(|t| t == "null")
        || schema.get("const").is_some_and(Value::is_null)
}

/// Wrapper keywords win over the referenced schema
fn merge_over(target: &mut Map<String, Value>, wrapper: Map<String, Value>) {
    for (key, value) in wrapper {
        if key == "type" && value.is_array() && target.contains_key("type") {
            continue;
        }
        target.insert(key, value);
    }
}

fn object_attributes(root: &Value, schema: &Map<String, Value>) -> Vec<Attribute> {
    let Some(Value::Object(properties)) = schema.get("properties") else {
        return Vec::new();
    };
    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    properties
        .iter()
        .map(|(wire_name, property)| {
            let property = normalize(root, property);
            let (r#type, validators) = attribute_type(root, &property);
            let is_required = required.contains(&wire_name.as_str());
            Attribute {
                name: to_tf_name(wire_name),
                wire_name: wire_name.clone(),
                description: property
                    .get("description")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                r#type,
                required: is_required,
                optional: !is_required,
                computed: false,
                validators,
            }
        })
        .collect()
}

fn attribute_type(root: &Value, schema: &Map<String, Value>) -> (AttributeType, Vec<Validator>) {
    let mut validators = Vec::new();

    if let Some(Value::Array(values)) = schema.get("enum") {
        let values = values
            .iter()
            .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string))
            .collect();
        validators.push(Validator::OneOf(values));
    }
    if let Some(Value::Array(values)) = schema.get("not").and_then(|not| not.get("enum")) {
        validators.push(Validator::NoneOf(values.clone()));
    }

    let kind = schema.get("type").and_then(Value::as_str);
    let r#type = match kind {
        Some("string") => {
            string_validators(schema, &mut validators);
            AttributeType::String
        }
        Some("integer") => {
            number_validators(schema, &mut validators);
            AttributeType::Int64
        }
        Some("number") => {
            number_validators(schema, &mut validators);
            AttributeType::Float64
        }
        Some("boolean") => AttributeType::Bool,
        Some("array") => {
            size_validators(schema, &mut validators);
            let items = schema
                .get("items")
                .map(|items| normalize(root, items))
                .unwrap_or_default();
            if is_structured_object(&items) {
                AttributeType::ListNested {
                    attributes: object_attributes(root, &items),
                }
            } else {
                AttributeType::List {
                    element: Box::new(attribute_type(root, &items).0),
                }
            }
        }
        Some("object") => {
            if is_structured_object(schema) {
                AttributeType::SingleNested {
                    attributes: object_attributes(root, schema),
                }
            } else {
                // Free-form objects decode into a map, so only their values are open
                let element = match schema.get("additionalProperties") {
                    Some(element @ Value::Object(_)) => normalize(root, element),
                    _ => Map::new(),
                };
                size_validators(schema, &mut validators);
                AttributeType::Map {
                    element: Box::new(attribute_type(root, &element).0),
                }
            }
        }
        _ if !validators.is_empty() => AttributeType::String,
        _ => AttributeType::Dynamic,
    };
    (r#type, validators)
}

fn is_structured_object(schema: &Map<String, Value>) -> bool {
    schema
        .get("properties")
        .and_then(Value::as_object)
        .is_some_and(|p| !p.is_empty())
        && !schema
            .get("x-kubernetes-preserve-unknown-fields")
            .is_some_and(|v| v == true)
}

fn string_validators(schema: &Map<String, Value>, validators: &mut Vec<Validator>) {
    if let Some(min) = schema.get("minLength").and_then(Value::as_u64) {
        validators.push(Validator::LengthAtLeast(min));
    }
    if let Some(max) = schema.get("maxLength").and_then(Value::as_u64) {
        validators.push(Validator::LengthAtMost(max));
    }
    if let Some(pattern) = schema.get("pattern").and_then(Value::as_str) {
        validators.push(Validator::RegexMatches(pattern.to_string()));
    }
}

fn number_validators(schema: &Map<String, Value>, validators: &mut Vec<Validator>) {
    let (format_min, format_max) = schema
        .get("format")
        .and_then(Value::as_str)
        .map_or((None, None), format_bounds);
    let bound = |key: &str| match schema.get(key) {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    };
    if let Some(min) = bound("minimum").or(format_min) {
        validators.push(Validator::AtLeast(min));
    }
    if let Some(max) = bound("maximum").or(format_max) {
        validators.push(Validator::AtMost(max));
    }
}

/// Range of the integer type behind a `format`, e.g. `int32` for an `i32` field
fn format_bounds(format: &str) -> (Option<Number>, Option<Number>) {
    match format {
        "int8" => (Some(i8::MIN.into()), Some(i8::MAX.into())),
        "int16" => (Some(i16::MIN.into()), Some(i16::MAX.into())),
        "int32" => (Some(i32::MIN.into()), Some(i32::MAX.into())),
        "uint8" => (Some(0.into()), Some(u8::MAX.into())),
        "uint16" => (Some(0.into()), Some(u16::MAX.into())),
        "uint32" => (Some(0.into()), Some(u32::MAX.into())),
        "uint" | "uint64" => (Some(0.into()), None),
        _ => (None, None),
    }
}

fn size_validators(schema: &Map<String, Value>, validators: &mut Vec<Validator>) {
    let (min_key, max_key) = if schema.get("type").is_some_and(|t| t == "object") {
        ("minProperties", "maxProperties")
    } else {
        ("minItems", "maxItems")
    };
    if let Some(min) = schema.get(min_key).and_then(Value::as_u64) {
        validators.push(Validator::SizeAtLeast(min));
    }
    if let Some(max) = schema.get(max_key).and_then(Value::as_u64) {
        validators.push(Validator::SizeAtMost(max));
    }
}
