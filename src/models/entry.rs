//! # Entry Model
//!
//! A content record: raw storage slots keyed `field_id_N` plus, after
//! hydration, a parallel map from field name to decoded [`FieldValue`].
//!
//! Hydration never destroys raw values: re-running a hydrator re-derives the
//! same decoded values from the same raw slots.
//!
//! Maps to the joined `channel_titles` / `channel_data` tables.

use crate::constants::field_key;
use crate::models::{FieldValue, Row};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// One loaded content entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub entry_id: i64,
    pub channel_id: i64,
    pub title: Option<String>,
    pub url_title: Option<String>,
    /// Ordered raw storage slots (`field_id_N` -> scalar).
    raw: BTreeMap<String, Value>,
    /// Decoded values keyed by field name, written by hydrators.
    values: HashMap<String, FieldValue>,
}

impl Entry {
    pub fn new(entry_id: i64, channel_id: i64) -> Self {
        Self {
            entry_id,
            channel_id,
            title: None,
            url_title: None,
            raw: BTreeMap::new(),
            values: HashMap::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url_title(mut self, url_title: impl Into<String>) -> Self {
        self.url_title = Some(url_title.into());
        self
    }

    /// Set a raw storage slot
    pub fn set_raw(&mut self, key: impl Into<String>, value: Value) {
        self.raw.insert(key.into(), value);
    }

    /// Raw value for a top-level field slot (`field_id_N`)
    pub fn raw_field(&self, field_id: i64) -> Option<&Value> {
        self.raw.get(&field_key(field_id))
    }

    /// Whether a raw storage key is present (absent differs from empty)
    pub fn has_raw(&self, key: &str) -> bool {
        self.raw.contains_key(key)
    }

    /// Assign a decoded value under the field's name
    pub fn set_value(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.insert(name.into(), value);
    }

    /// Decoded value for a field name
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Mutable access to the rows of a hydrated matrix/grid field.
    ///
    /// Returns `None` when the field has not been hydrated to rows (yet).
    pub fn rows_mut(&mut self, name: &str) -> Option<&mut Vec<Row>> {
        match self.values.get_mut(name) {
            Some(FieldValue::Rows(rows)) => Some(rows),
            _ => None,
        }
    }

    /// Project this entry into an output map of decoded values.
    ///
    /// Internal storage slots (`field_id_N`) are excluded; only identity
    /// columns and named decoded values appear.
    pub fn to_output(&self) -> Value {
        let mut map = Map::new();
        map.insert("entry_id".to_string(), Value::from(self.entry_id));
        map.insert("channel_id".to_string(), Value::from(self.channel_id));
        if let Some(title) = &self.title {
            map.insert("title".to_string(), Value::String(title.clone()));
        }
        if let Some(url_title) = &self.url_title {
            map.insert("url_title".to_string(), Value::String(url_title.clone()));
        }

        let mut names: Vec<&String> = self.values.keys().collect();
        names.sort();
        for name in names {
            map.insert(name.clone(), self.values[name].to_json());
        }

        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_field_lookup() {
        let mut entry = Entry::new(1, 2);
        entry.set_raw("field_id_42", json!("hello"));

        assert_eq!(entry.raw_field(42), Some(&json!("hello")));
        assert_eq!(entry.raw_field(43), None);
        assert!(entry.has_raw("field_id_42"));
        assert!(!entry.has_raw("field_id_43"));
    }

    #[test]
    fn test_output_excludes_raw_slots() {
        let mut entry = Entry::new(1, 2).with_title("First post");
        entry.set_raw("field_id_42", json!("hello"));
        entry.set_value("body", FieldValue::Text("hello".into()));

        let output = entry.to_output();
        assert_eq!(output["title"], json!("First post"));
        assert_eq!(output["body"], json!("hello"));
        assert!(output.get("field_id_42").is_none());
    }

    #[test]
    fn test_hydration_preserves_raw() {
        let mut entry = Entry::new(1, 2);
        entry.set_raw("field_id_42", json!("1700000000"));
        entry.set_value("event_date", FieldValue::Null);

        assert_eq!(entry.raw_field(42), Some(&json!("1700000000")));
    }
}
