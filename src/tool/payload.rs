// ABOUTME: Payload - the structured key-value input of a tool call.
// ABOUTME: Permits strings, numbers, booleans, lists and nested maps; rejects null.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ToolError;

/// Validated tool input: a JSON object with no `null` anywhere inside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, validating its shape.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<(), ToolError> {
        let key = key.into();
        let value = value.into();
        check_shape(&key, &value)?;
        self.0.insert(key, value);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Self, ToolError> {
        self.insert(key, value)?;
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into the JSON value handed to [`Tool::execute`](super::Tool::execute).
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl TryFrom<Value> for Payload {
    type Error = ToolError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => {
                for (key, v) in &map {
                    check_shape(key, v)?;
                }
                Ok(Self(map))
            }
            other => Err(ToolError::InvalidParams(format!(
                "tool input must be an object, got {}",
                kind_of(&other)
            ))),
        }
    }
}

fn check_shape(path: &str, value: &Value) -> Result<(), ToolError> {
    match value {
        Value::Null => Err(ToolError::InvalidParams(format!(
            "null is not a permitted value (at '{}')",
            path
        ))),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(()),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| check_shape(&format!("{}[{}]", path, i), item)),
        Value::Object(map) => map
            .iter()
            .try_for_each(|(k, v)| check_shape(&format!("{}.{}", path, k), v)),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
