//! In-memory [`RowFetcher`] backed by a table map. Used by the test suite
//! and by embedders that already hold the legacy data in memory.
//!
//! Rows are returned in insertion order (filtered, not sorted): the row
//! resolver owns the canonical ordering, and keeping fixture order here lets
//! tests exercise that.

use crate::error::Result;
use crate::storage::{RawRow, RowFetcher, RowFilter};
use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    tables: HashMap<String, Vec<RawRow>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rows to a table, creating it if needed
    pub fn insert_rows(&mut self, table: impl Into<String>, rows: Vec<RawRow>) {
        self.tables.entry(table.into()).or_default().extend(rows);
    }

    /// Builder-style table population for fixtures
    pub fn with_table(mut self, table: impl Into<String>, rows: Vec<RawRow>) -> Self {
        self.insert_rows(table, rows);
        self
    }

    fn matches(row: &RawRow, filter: &RowFilter) -> bool {
        if !filter.entry_ids.is_empty() {
            match row.get_i64("entry_id") {
                Some(id) if filter.entry_ids.contains(&id) => {}
                _ => return false,
            }
        }
        if !filter.field_ids.is_empty() {
            match row.get_i64("field_id") {
                Some(id) if filter.field_ids.contains(&id) => {}
                _ => return false,
            }
        }
        true
    }
}

#[async_trait]
impl RowFetcher for MemoryStorage {
    async fn fetch_rows(&self, table: &str, filter: &RowFilter) -> Result<Vec<RawRow>> {
        let rows = self
            .tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| Self::matches(row, filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_filters_by_entry_and_field() {
        let storage = MemoryStorage::new().with_table(
            "matrix_data",
            vec![
                RawRow::new()
                    .with("entry_id", json!(1))
                    .with("field_id", json!(10)),
                RawRow::new()
                    .with("entry_id", json!(2))
                    .with("field_id", json!(10)),
                RawRow::new()
                    .with("entry_id", json!(1))
                    .with("field_id", json!(11)),
            ],
        );

        let filter = RowFilter::for_entries(&[1]).with_field_ids(&[10]);
        let rows = storage.fetch_rows("matrix_data", &filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get_i64("field_id"), Some(10));
    }

    #[tokio::test]
    async fn test_unknown_table_is_empty() {
        let storage = MemoryStorage::new();
        let rows = storage
            .fetch_rows("missing", &RowFilter::default())
            .await
            .unwrap();
        assert!(rows.is_empty());
    }
}
