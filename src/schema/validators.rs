//! # Validators
//!
//! Attribute value validators, in the spirit of the framework's
//! `stringvalidator`/`int64validator`/`listvalidator` packages.
//!
//! Validators only look at values of the type they understand; a type
//! mismatch has already been reported by the caller.

use regex::Regex;
use serde::Serialize;
use serde_json::{Number, Value};

use crate::diagnostics::{AttributePath, Diagnostics};

/// Attribute value validator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Validator {
    /// String must be one of the listed values
    OneOf(Vec<String>),
    /// Value must not be any of the listed values
    NoneOf(Vec<Value>),
    /// Number must be greater than or equal to the bound
    AtLeast(Number),
    /// Number must be less than or equal to the bound
    AtMost(Number),
    /// String must match the regular expression
    RegexMatches(String),
    /// String length (in characters) must be at least the bound
    LengthAtLeast(u64),
    /// String length (in characters) must be at most the bound
    LengthAtMost(u64),
    /// List or map must contain at least the given number of elements
    SizeAtLeast(u64),
    /// List or map must contain at most the given number of elements
    SizeAtMost(u64),
}

impl Validator {
    /// Human readable description, used in diagnostics and documentation
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Validator::OneOf(values) => {
                let quoted: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
                format!("value must be one of: [{}]", quoted.join(" "))
            }
            Validator::NoneOf(values) => {
                let listed: Vec<String> = values.iter().map(Value::to_string).collect();
                format!("value must be none of: [{}]", listed.join(" "))
            }
            Validator::AtLeast(min) => format!("value must be at least {min}"),
            Validator::AtMost(max) => format!("value must be at most {max}"),
            Validator::RegexMatches(pattern) => {
                format!("value must match regular expression '{pattern}'")
            }
            Validator::LengthAtLeast(min) => format!("string length must be at least {min}"),
            Validator::LengthAtMost(max) => format!("string length must be at most {max}"),
            Validator::SizeAtLeast(min) => format!("list must contain at least {min} elements"),
            Validator::SizeAtMost(max) => format!("list must contain at most {max} elements"),
        }
    }

    /// Check a non-null value, adding an error diagnostic on failure
    pub fn validate(&self, path: &AttributePath, value: &Value, diagnostics: &mut Diagnostics) {
        match (self, value) {
            (Validator::OneOf(values), Value::String(s)) => {
                if !values.iter().any(|v| v == s) {
                    self.fail(path, "Invalid Attribute Value Match", &format!("{s:?}"), diagnostics);
                }
            }
            (Validator::NoneOf(values), _) => {
                if values.iter().any(|v| same_value(v, value)) {
                    let got = value.as_str().map_or_else(|| value.to_string(), |s| format!("{s:?}"));
                    self.fail(path, "Invalid Attribute Value Match", &got, diagnostics);
                }
            }
            (Validator::AtLeast(min), Value::Number(n)) => {
                if compare(n, min).is_some_and(std::cmp::Ordering::is_lt) {
                    self.fail(path, "Invalid Attribute Value", &n.to_string(), diagnostics);
                }
            }
            (Validator::AtMost(max), Value::Number(n)) => {
                if compare(n, max).is_some_and(std::cmp::Ordering::is_gt) {
                    self.fail(path, "Invalid Attribute Value", &n.to_string(), diagnostics);
                }
            }
            (Validator::RegexMatches(pattern), Value::String(s)) => match Regex::new(pattern) {
                Ok(re) => {
                    if !re.is_match(s) {
                        self.fail(path, "Invalid Attribute Value Match", s, diagnostics);
                    }
                }
                Err(e) => diagnostics.add_attribute_error(
                    path,
                    "Invalid Attribute Validator",
                    format!("Regular expression '{pattern}' is not valid: {e}"),
                ),
            },
            (Validator::LengthAtLeast(min), Value::String(s)) => {
                let len = s.chars().count() as u64;
                if len < *min {
                    self.fail(path, "Invalid Attribute Value Length", &len.to_string(), diagnostics);
                }
            }
            (Validator::LengthAtMost(max), Value::String(s)) => {
                let len = s.chars().count() as u64;
                if len > *max {
                    self.fail(path, "Invalid Attribute Value Length", &len.to_string(), diagnostics);
                }
            }
            (Validator::SizeAtLeast(min), _) => {
                if let Some(len) = collection_len(value) {
                    if len < *min {
                        self.fail(path, "Invalid Attribute Value", &len.to_string(), diagnostics);
                    }
                }
            }
            (Validator::SizeAtMost(max), _) => {
                if let Some(len) = collection_len(value) {
                    if len > *max {
                        self.fail(path, "Invalid Attribute Value", &len.to_string(), diagnostics);
                    }
                }
            }
            _ => {}
        }
    }

    fn fail(&self, path: &AttributePath, summary: &str, got: &str, diagnostics: &mut Diagnostics) {
        diagnostics.add_attribute_error(
            path,
            summary,
            format!("Attribute {path} {}, got: {got}", self.description()),
        );
    }
}

/// Compare two JSON numbers, exactly for integers
fn compare(value: &Number, bound: &Number) -> Option<std::cmp::Ordering> {
    match (value.as_i64(), bound.as_i64()) {
        (Some(v), Some(b)) => Some(v.cmp(&b)),
        _ => value.as_f64()?.partial_cmp(&bound.as_f64()?),
    }
}

/// Equality with `9404.0` matching `9404`
fn same_value(listed: &Value, value: &Value) -> bool {
    match (listed, value) {
        (Value::Number(a), Value::Number(b)) => {
            compare(b, a).is_some_and(std::cmp::Ordering::is_eq)
        }
        _ => listed == value,
    }
}

fn collection_len(value: &Value) -> Option<u64> {
    match value {
        Value::Array(items) => Some(items.len() as u64),
        Value::Object(entries) => Some(entries.len() as u64),
        _ => None,
    }
}
