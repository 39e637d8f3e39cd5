//! Instance property bags.
//!
//! Repository instances carry their attributes as an ordered mapping from
//! property name to a tagged primitive value. Converters consume known
//! properties with the `remove_*` methods and then sweep whatever is left
//! into a bean's extended-properties map, so each property is read exactly
//! once.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single typed property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyValue {
    String { value: String },
    Int { value: i64 },
    Float { value: f64 },
    Boolean { value: bool },
    Date { value: DateTime<Utc> },
    /// Enum values carry the stored ordinal plus the symbolic name the
    /// repository knew at write time. Readers map the ordinal through their
    /// own table and fall back to a default symbol for unknown ordinals.
    Enum { ordinal: i32, symbol: String },
    Array { values: Vec<PropertyValue> },
    Map { entries: BTreeMap<String, PropertyValue> },
}

impl PropertyValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String {
            value: value.into(),
        }
    }

    pub fn int(value: i64) -> Self {
        Self::Int { value }
    }

    pub fn boolean(value: bool) -> Self {
        Self::Boolean { value }
    }

    pub fn date(value: DateTime<Utc>) -> Self {
        Self::Date { value }
    }

    pub fn enumeration(ordinal: i32, symbol: impl Into<String>) -> Self {
        Self::Enum {
            ordinal,
            symbol: symbol.into(),
        }
    }

    pub fn string_array(values: impl IntoIterator<Item = String>) -> Self {
        Self::Array {
            values: values.into_iter().map(PropertyValue::string).collect(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String { value } => Some(value),
            _ => None,
        }
    }

    /// Render the value as plain JSON for extended-properties sweeps.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::String { value } => serde_json::Value::String(value.clone()),
            Self::Int { value } => serde_json::Value::from(*value),
            Self::Float { value } => serde_json::Value::from(*value),
            Self::Boolean { value } => serde_json::Value::Bool(*value),
            Self::Date { value } => serde_json::Value::String(value.to_rfc3339()),
            Self::Enum { symbol, .. } => serde_json::Value::String(symbol.clone()),
            Self::Array { values } => {
                serde_json::Value::Array(values.iter().map(PropertyValue::to_json).collect())
            }
            Self::Map { entries } => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Ordered property bag attached to entities, relationships and
/// classifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceProperties {
    properties: BTreeMap<String, PropertyValue>,
}

impl InstanceProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert for skeleton fill-in.
    pub fn with(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Builder-style insert that skips `None` values.
    pub fn with_optional_string(self, name: impl Into<String>, value: Option<String>) -> Self {
        match value {
            Some(v) => self.with(name, PropertyValue::string(v)),
            None => self,
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.properties.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Remove and return a property of any kind.
    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.properties.remove(name)
    }

    /// Remove a string property, or `None` when the property is absent or
    /// holds a non-string value (the value stays removed either way; a
    /// mis-typed property must not leak into extended properties).
    pub fn remove_string(&mut self, name: &str) -> Option<String> {
        match self.properties.remove(name) {
            Some(PropertyValue::String { value }) => Some(value),
            _ => None,
        }
    }

    /// Remove an int property with a default for absent or mis-typed values.
    pub fn remove_int_or(&mut self, name: &str, default: i64) -> i64 {
        match self.properties.remove(name) {
            Some(PropertyValue::Int { value }) => value,
            _ => default,
        }
    }

    /// Remove an optional int property.
    pub fn remove_int(&mut self, name: &str) -> Option<i64> {
        match self.properties.remove(name) {
            Some(PropertyValue::Int { value }) => Some(value),
            _ => None,
        }
    }

    /// Remove a boolean property with a default.
    pub fn remove_boolean_or(&mut self, name: &str, default: bool) -> bool {
        match self.properties.remove(name) {
            Some(PropertyValue::Boolean { value }) => value,
            _ => default,
        }
    }

    /// Remove a date property.
    pub fn remove_date(&mut self, name: &str) -> Option<DateTime<Utc>> {
        match self.properties.remove(name) {
            Some(PropertyValue::Date { value }) => Some(value),
            _ => None,
        }
    }

    /// Remove an enum property, returning its stored ordinal.
    pub fn remove_enum_ordinal(&mut self, name: &str) -> Option<i32> {
        match self.properties.remove(name) {
            Some(PropertyValue::Enum { ordinal, .. }) => Some(ordinal),
            _ => None,
        }
    }

    /// Remove an array-of-strings property, keeping only string elements.
    pub fn remove_string_array(&mut self, name: &str) -> Option<Vec<String>> {
        match self.properties.remove(name) {
            Some(PropertyValue::Array { values }) => Some(
                values
                    .into_iter()
                    .filter_map(|v| match v {
                        PropertyValue::String { value } => Some(value),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Drain every remaining property into a JSON map keyed by the original
    /// property name. This is the tail end of the removal protocol: call it
    /// only after all known properties have been removed.
    pub fn into_extended_properties(self) -> BTreeMap<String, serde_json::Value> {
        self.properties
            .into_iter()
            .map(|(name, value)| (name, value.to_json()))
            .collect()
    }
}

impl FromIterator<(String, PropertyValue)> for InstanceProperties {
    fn from_iter<I: IntoIterator<Item = (String, PropertyValue)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}
