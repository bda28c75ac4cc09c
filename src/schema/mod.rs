//! # Resource Schema
//!
//! Terraform-style attribute schema for provider resources.
//!
//! Attribute trees are not written by hand. They are derived from the JSON
//! schema that `schemars` generates for the typed CRD model, so the
//! attribute names, types and validators follow the model field-for-field.
//!
//! ## Module Structure
//!
//! - `derive.rs` - JSON schema to attribute tree conversion, name mapping
//! - `validators.rs` - `OneOf`, `AtLeast`, `RegexMatches` and friends
//! - `validate.rs` - configuration checks producing diagnostics
//! - `translate.rs` - attribute names to CRD wire names

mod derive;
mod translate;
mod validate;
mod validators;

use serde::Serialize;
use serde_json::Value;

use crate::diagnostics::Diagnostics;

pub use derive::{derive_attributes, to_tf_name};
pub use translate::to_wire;
pub use validate::validate;
pub use validators::Validator;

/// Value type of an attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int64,
    Float64,
    Bool,
    /// Any value, passed through untouched
    Dynamic,
    List {
        element: Box<AttributeType>,
    },
    Map {
        element: Box<AttributeType>,
    },
    SingleNested {
        attributes: Vec<Attribute>,
    },
    ListNested {
        attributes: Vec<Attribute>,
    },
}

impl AttributeType {
    /// Type name as used in type mismatch messages
    #[must_use]
    pub fn friendly_name(&self) -> String {
        match self {
            AttributeType::String => "string".to_string(),
            AttributeType::Int64 | AttributeType::Float64 => "number".to_string(),
            AttributeType::Bool => "bool".to_string(),
            AttributeType::Dynamic => "any value".to_string(),
            AttributeType::List { element } => format!("list of {}", element.friendly_name()),
            AttributeType::Map { element } => format!("map of {}", element.friendly_name()),
            AttributeType::SingleNested { .. } => "object".to_string(),
            AttributeType::ListNested { .. } => "list of object".to_string(),
        }
    }

    /// Child attributes of nested types
    #[must_use]
    pub fn nested_attributes(&self) -> Option<&[Attribute]> {
        match self {
            AttributeType::SingleNested { attributes } | AttributeType::ListNested { attributes } => {
                Some(attributes)
            }
            _ => None,
        }
    }
}

/// A single attribute of a resource schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    /// Terraform attribute name (snake_case)
    pub name: String,
    /// Field name in the Kubernetes manifest (camelCase)
    pub wire_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type")]
    pub r#type: AttributeType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl Attribute {
    /// A string attribute set only by the provider
    #[must_use]
    pub fn computed_string(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            wire_name: name.to_string(),
            description: description.to_string(),
            r#type: AttributeType::String,
            required: false,
            optional: false,
            computed: true,
            validators: Vec::new(),
        }
    }

    /// Computed and not settable by configuration
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.computed && !self.optional && !self.required
    }
}

/// Schema of one resource type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceSchema {
    pub version: i64,
    pub description: String,
    pub attributes: Vec<Attribute>,
}

impl ResourceSchema {
    /// Look up an attribute by dotted path, e.g. `spec.kafka.replicas`
    ///
    /// List nesting is transparent: `spec.kafka.listeners.port` finds the
    /// `port` attribute of the listener elements.
    #[must_use]
    pub fn attribute(&self, path: &str) -> Option<&Attribute> {
        let mut attributes = self.attributes.as_slice();
        let mut found = None;
        for segment in path.split('.') {
            let attribute = attributes.iter().find(|a| a.name == segment)?;
            attributes = attribute.r#type.nested_attributes().unwrap_or_default();
            found = Some(attribute);
        }
        found
    }

    /// Validate a configuration against this schema
    #[must_use]
    pub fn validate(&self, config: &Value) -> Diagnostics {
        validate(&self.attributes, config)
    }

    /// Map a validated configuration to the manifest shape
    #[must_use]
    pub fn to_wire(&self, config: &Value) -> Value {
        to_wire(&self.attributes, config)
    }
}
