//! Owned representation of a resolved setting value

use crate::indifferent::IndifferentMap;
use serde::Serialize;
use serde_yaml::Value;

/// A resolved setting value.
///
/// Mirrors the YAML value space, except that mappings are wrapped in
/// [`IndifferentMap`] so lookups work with either string or token keys.
/// The wrapping is deep: mappings nested inside sequences or other
/// mappings are wrapped too.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Setting {
    Null,
    Bool(bool),
    Number(serde_yaml::Number),
    String(String),
    Sequence(Vec<Setting>),
    Map(IndifferentMap),
}

impl Setting {
    /// The string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Setting::String(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean content, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Setting::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer content, if this is an integer number.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Setting::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// The float content, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Setting::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// The elements, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Setting]> {
        match self {
            Setting::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The wrapped mapping, if this is a mapping value.
    pub fn as_map(&self) -> Option<&IndifferentMap> {
        match self {
            Setting::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Whether this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Setting::Null)
    }
}

impl From<Value> for Setting {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Setting::Null,
            Value::Bool(b) => Setting::Bool(b),
            Value::Number(n) => Setting::Number(n),
            Value::String(s) => Setting::String(s),
            Value::Sequence(items) => {
                Setting::Sequence(items.into_iter().map(Setting::from).collect())
            }
            Value::Mapping(map) => Setting::Map(IndifferentMap::from_mapping(map)),
            // Tags carry no meaning for settings; keep the inner value.
            Value::Tagged(tagged) => Setting::from(tagged.value),
        }
    }
}

impl From<&str> for Setting {
    fn from(value: &str) -> Self {
        Setting::String(value.to_string())
    }
}

impl From<String> for Setting {
    fn from(value: String) -> Self {
        Setting::String(value)
    }
}

impl From<bool> for Setting {
    fn from(value: bool) -> Self {
        Setting::Bool(value)
    }
}

impl From<i64> for Setting {
    fn from(value: i64) -> Self {
        Setting::Number(value.into())
    }
}

impl From<i32> for Setting {
    fn from(value: i32) -> Self {
        Setting::Number(i64::from(value).into())
    }
}

impl From<u64> for Setting {
    fn from(value: u64) -> Self {
        Setting::Number(value.into())
    }
}

impl From<f64> for Setting {
    fn from(value: f64) -> Self {
        Setting::Number(value.into())
    }
}

/// String form of a scalar mapping key.
///
/// YAML permits numeric and boolean keys; they compare against environment
/// names and setting names by their display form. Composite keys have no
/// string form and return `None`.
pub(crate) fn scalar_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
