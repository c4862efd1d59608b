//! Request parameter mapping.
//!
//! Submitted form fields arrive as text. After validation, fields that had a
//! validator hold their converted value; all other fields stay strings.

use crate::error::{HandlerError, HandlerResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::form_urlencoded;

/// Field name to value mapping for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Parse an `application/x-www-form-urlencoded` string.
    ///
    /// A key that appears more than once collects its values into an array.
    pub fn from_urlencoded(input: &str) -> Self {
        let mut params = Self::new();
        for (key, value) in form_urlencoded::parse(input.as_bytes()) {
            params.append(key.into_owned(), Value::String(value.into_owned()));
        }
        params
    }

    /// Build parameters from raw text pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.append(key.into(), Value::String(value.into()));
        }
        params
    }

    /// Encode the parameters as a form body. Non-string values use their JSON text.
    pub fn to_urlencoded(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.0 {
            match value {
                Value::Array(items) => {
                    for item in items {
                        serializer.append_pair(key, &value_text(item));
                    }
                }
                other => {
                    serializer.append_pair(key, &value_text(other));
                }
            }
        }
        serializer.finish()
    }

    fn append(&mut self, key: String, value: Value) {
        match self.0.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                self.0.insert(key, value);
            }
        }
    }

    /// Get a value by field name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    /// Remove a value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Check whether a field was submitted.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Merge `other` into this set; values from `other` win.
    pub fn extend(&mut self, other: Params) {
        self.0.extend(other.0);
    }

    /// Iterate over fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Field names in name order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Integer argument. Fails unless the value was converted to an integer.
    pub fn int(&self, name: &str) -> HandlerResult<i64> {
        let value = self.required(name)?;
        value
            .as_i64()
            .ok_or_else(|| HandlerError::unexpected_type(name, "integer", type_name(value)))
    }

    /// Float argument. Integers are accepted.
    pub fn float(&self, name: &str) -> HandlerResult<f64> {
        let value = self.required(name)?;
        value
            .as_f64()
            .ok_or_else(|| HandlerError::unexpected_type(name, "number", type_name(value)))
    }

    /// Boolean argument. Fails unless the value was converted to a bool.
    pub fn bool(&self, name: &str) -> HandlerResult<bool> {
        let value = self.required(name)?;
        value
            .as_bool()
            .ok_or_else(|| HandlerError::unexpected_type(name, "boolean", type_name(value)))
    }

    /// Text argument. Fails unless the value is a string.
    pub fn text(&self, name: &str) -> HandlerResult<&str> {
        let value = self.required(name)?;
        value
            .as_str()
            .ok_or_else(|| HandlerError::unexpected_type(name, "string", type_name(value)))
    }

    /// Optional text argument; `null` and absent are both `None`.
    pub fn opt_text(&self, name: &str) -> HandlerResult<Option<&str>> {
        match self.0.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(HandlerError::unexpected_type(
                name,
                "string",
                type_name(other),
            )),
        }
    }

    fn required(&self, name: &str) -> HandlerResult<&Value> {
        self.0.get(name).ok_or_else(|| HandlerError::missing(name))
    }

    /// Consume into the underlying JSON map.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Borrow the underlying JSON map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Params> for Value {
    fn from(params: Params) -> Self {
        Value::Object(params.0)
    }
}

impl FromIterator<(String, Value)> for Params {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Params {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Display text for a value: strings unquoted, `null` empty, others as JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Short JSON type name used in error reports.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
