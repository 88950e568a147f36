use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{RuleError, RulesResult};
use crate::value::Value;

/// The field values checked by a [`crate::prelude::Validator`], keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues(BTreeMap<String, Value>);

impl FieldValues {
    /// Creates an empty set of field values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds field values out of any type serializing to a JSON object.
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use validatable_rules::prelude::{FieldValues, Value};
    ///
    /// #[derive(Serialize)]
    /// struct Contact {
    ///     name: String,
    ///     age: u32,
    /// }
    ///
    /// let fields = FieldValues::from_serialize(&Contact { name: "Klaus".into(), age: 42 }).unwrap();
    /// assert_eq!(fields.get("name"), Some(&Value::from("Klaus")));
    /// assert_eq!(fields.get("age"), Some(&Value::Integer(42)));
    /// ```
    pub fn from_serialize<T>(value: &T) -> RulesResult<Self>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(value)? {
            serde_json::Value::Object(map) => Ok(map
                .into_iter()
                .map(|(key, value)| (key, Value::from(value)))
                .collect()),
            other => Err(RuleError::NotAnObject(json_type_name(&other))),
        }
    }

    /// Sets the value of `field`, returning the previous one, if any.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Builder-style variant of [`FieldValues::insert`].
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Returns the value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns whether `field` is present, even if null.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Keeps only the given fields.
    pub fn only<'a>(mut self, fields: impl IntoIterator<Item = &'a str>) -> Self {
        let keep: Vec<&str> = fields.into_iter().collect();
        self.0.retain(|field, _| keep.contains(&field.as_str()));
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(field, value)| (field.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for FieldValues
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for FieldValues {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
