//! # Row Model
//!
//! A repeatable sub-record owned by exactly one (entry, field) pair. Raw
//! column slots are keyed `col_id_N` and hydrated in place to column-name
//! keys holding decoded values. A row never outlives its owning entry, and
//! row identity within a field is positional (`row_order`).
//!
//! Maps to the `matrix_data` table and the per-field `channel_grid_field_X`
//! tables.

use crate::constants::col_key;
use crate::models::FieldValue;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// One matrix/grid row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub row_id: i64,
    pub entry_id: i64,
    pub field_id: i64,
    pub row_order: i64,
    /// Ordered raw column slots (`col_id_N` -> scalar).
    raw: BTreeMap<String, Value>,
    /// Decoded cells keyed by column name, written by hydrators.
    values: HashMap<String, FieldValue>,
}

impl Row {
    pub fn new(row_id: i64, entry_id: i64, field_id: i64, row_order: i64) -> Self {
        Self {
            row_id,
            entry_id,
            field_id,
            row_order,
            raw: BTreeMap::new(),
            values: HashMap::new(),
        }
    }

    /// Set a raw column slot
    pub fn set_raw(&mut self, key: impl Into<String>, value: Value) {
        self.raw.insert(key.into(), value);
    }

    /// Raw value for a column slot (`col_id_N`)
    pub fn raw_col(&self, col_id: i64) -> Option<&Value> {
        self.raw.get(&col_key(col_id))
    }

    /// Whether a column slot is present in this row's storage.
    ///
    /// Sparse storage omits slots entirely; an absent slot decodes to the
    /// column type's empty value rather than an error.
    pub fn has_raw_col(&self, col_id: i64) -> bool {
        self.raw.contains_key(&col_key(col_id))
    }

    /// Assign a decoded cell under the column's name
    pub fn set_value(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.insert(name.into(), value);
    }

    /// Decoded cell for a column name
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Project this row into an output map of decoded cells.
    ///
    /// Bookkeeping columns and raw `col_id_N` slots are excluded; only
    /// `row_id` and named decoded cells appear.
    pub fn to_output(&self) -> Value {
        let mut map = Map::new();
        map.insert("row_id".to_string(), Value::from(self.row_id));

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
    fn test_raw_col_presence() {
        let mut row = Row::new(10, 1, 42, 0);
        row.set_raw("col_id_7", json!(""));

        assert!(row.has_raw_col(7));
        assert_eq!(row.raw_col(7), Some(&json!("")));
        assert!(!row.has_raw_col(8));
        assert_eq!(row.raw_col(8), None);
    }

    #[test]
    fn test_output_excludes_internal_keys() {
        let mut row = Row::new(10, 1, 42, 0);
        row.set_raw("col_id_7", json!("a|b"));
        row.set_value("tags", FieldValue::List(vec!["a".into(), "b".into()]));

        let output = row.to_output();
        assert_eq!(output["row_id"], json!(10));
        assert_eq!(output["tags"], json!(["a", "b"]));
        assert!(output.get("col_id_7").is_none());
        assert!(output.get("entry_id").is_none());
        assert!(output.get("row_order").is_none());
    }
}
