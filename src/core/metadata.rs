//! Structured metadata attached to log records
//!
//! `Metadata` is an insertion-ordered map of string keys to JSON values.
//! Loggers hold it behind an `Arc` and replace it on every merge, so a record
//! that captured the previous map keeps seeing exactly what was current when
//! it was created.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: Map<String, Value>,
}

impl Metadata {
    /// Create an empty metadata map
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Add a field (builder version)
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field (mutable version)
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Return a new map holding `self` overlaid with `other`.
    ///
    /// The merge is shallow: a colliding key takes the value from `other`
    /// as a whole, nested objects are not combined.
    #[must_use]
    pub fn merged(&self, other: &Metadata) -> Metadata {
        let mut fields = self.fields.clone();
        for (key, value) in &other.fields {
            fields.insert(key.clone(), value.clone());
        }
        Metadata { fields }
    }

    /// Format fields as key=value pairs
    pub fn format_fields(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| match v {
                Value::String(s) => format!("{}={}", k, s),
                other => format!("{}={}", k, other),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Metadata
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Metadata::new();
        for (key, value) in iter {
            metadata.add_field(key, value);
        }
        metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_last_write_wins() {
        let base = Metadata::from([("a", 1)]);
        let merged = base.merged(&Metadata::from([("a", json!(2)), ("b", json!(3))]));

        assert_eq!(merged.get("a"), Some(&json!(2)));
        assert_eq!(merged.get("b"), Some(&json!(3)));
        assert_eq!(merged.len(), 2);
        // receiver is untouched
        assert_eq!(base.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_merge_is_shallow() {
        let base = Metadata::new().with_field("user", json!({"id": 1, "name": "ada"}));
        let merged = base.merged(&Metadata::new().with_field("user", json!({"id": 2})));

        assert_eq!(merged.get("user"), Some(&json!({"id": 2})));
    }

    #[test]
    fn test_keeps_insertion_order() {
        let metadata = Metadata::new()
            .with_field("zeta", 1)
            .with_field("alpha", 2)
            .with_field("mid", 3);

        let keys: Vec<&str> = metadata.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert_eq!(
            serde_json::to_string(&metadata).unwrap(),
            r#"{"zeta":1,"alpha":2,"mid":3}"#
        );
    }

    #[test]
    fn test_format_fields() {
        let metadata = Metadata::new()
            .with_field("service", "api")
            .with_field("port", 8080);

        assert_eq!(metadata.to_string(), "service=api port=8080");
    }
}
