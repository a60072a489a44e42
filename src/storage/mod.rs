//! # Storage Collaborator
//!
//! The hydration core never talks to a database directly: all bulk fetches
//! go through the [`RowFetcher`] trait, which any tabular backend can
//! implement. Rows come back as generic [`RawRow`] key/value maps so that
//! "column absent from storage" stays distinguishable from "column present
//! but empty".
//!
//! Implementations should return rows ordered ascending by
//! (entry_id, field_id, row_order) where those columns exist; the row
//! resolver re-applies the canonical ordering regardless, since positional
//! row identity is load-bearing.

pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use memory::MemoryStorage;
#[cfg(feature = "postgres")]
pub use postgres::PostgresStorage;

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

/// Filter for a bulk row fetch: an entry-ID set and an optional field-ID
/// set for per-field tables.
#[derive(Debug, Clone, Default)]
pub struct RowFilter {
    pub entry_ids: Vec<i64>,
    pub field_ids: Vec<i64>,
}

impl RowFilter {
    /// Filter by entry IDs only
    pub fn for_entries(entry_ids: &[i64]) -> Self {
        Self {
            entry_ids: entry_ids.to_vec(),
            field_ids: Vec::new(),
        }
    }

    /// Filter by field IDs only
    pub fn for_fields(field_ids: &[i64]) -> Self {
        Self {
            entry_ids: Vec::new(),
            field_ids: field_ids.to_vec(),
        }
    }

    /// Add a field-ID filter
    pub fn with_field_ids(mut self, field_ids: &[i64]) -> Self {
        self.field_ids = field_ids.to_vec();
        self
    }
}

/// A generic raw storage row: string keys mapped to JSON scalars.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    values: BTreeMap<String, Value>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Builder-style insert for fixtures
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Whether the key exists in this row's storage at all
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Integer accessor tolerating the legacy habit of storing numbers as
    /// text.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.values.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key)?.as_str()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

impl FromIterator<(String, Value)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Bulk row fetch collaborator.
#[async_trait]
pub trait RowFetcher: Send + Sync {
    /// Fetch all rows of `table` matching the filter.
    ///
    /// Used by hydrator preloads; one call fetches data for every entry in
    /// the batch.
    async fn fetch_rows(&self, table: &str, filter: &RowFilter) -> Result<Vec<RawRow>>;
}
