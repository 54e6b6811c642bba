//! Render context passed to a renderer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{DomainError, DomainValidator as validator};

/// Mapping from string keys to arbitrary JSON-like values.
///
/// Key order carries no meaning; the template decides interpolation order.
/// A missing key renders as empty/falsy per Mustache semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderData(Map<String, Value>);

impl RenderData {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        validator::validate_render_data(&value)?;
        let Value::Object(map) = value else {
            return Err(DomainError::InvalidRenderData("expected an object".into()));
        };
        Ok(Self(map))
    }

    /// Parse a JSON document into render data.
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| DomainError::InvalidRenderData(e.to_string()))?;
        Self::from_value(value)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy `other` over `self`; keys in `other` win.
    pub fn extend(&mut self, other: &RenderData) {
        for (key, value) in other.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// A fresh mapping holding `self` overlaid by `overrides`.
    ///
    /// Neither input is modified.
    pub fn merged_with(&self, overrides: &RenderData) -> RenderData {
        let mut merged = self.clone();
        merged.extend(overrides);
        merged
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for RenderData {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<RenderData> for Value {
    fn from(data: RenderData) -> Self {
        data.into_value()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RenderData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for RenderData {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
