//! # Nested Row Resolver
//!
//! Turns raw storage rows from `matrix_data` / `channel_grid_field_X` into
//! [`Row`] models, applies the canonical (entry_id, field_id, row_order)
//! ordering, and groups them by (entry, field) for per-entry hydration.
//!
//! The ordering is load-bearing: row identity within a field is positional,
//! so the resolver sorts regardless of what the storage collaborator
//! returned. Column definitions are constructed once per run and shared
//! (`Arc<Col>` in the collection's per-run index), never rebuilt per row.

use crate::constants::COL_KEY_PREFIX;
use crate::models::Row;
use crate::storage::RawRow;
use std::collections::HashMap;

/// Preloaded matrix/grid rows grouped by (entry, field).
#[derive(Debug, Clone, Default)]
pub struct RowSet {
    by_entry_field: HashMap<(i64, i64), Vec<Row>>,
    total: usize,
}

impl RowSet {
    /// Sort rows canonically and group them by (entry, field)
    pub fn build(mut rows: Vec<Row>) -> Self {
        rows.sort_by_key(|r| (r.entry_id, r.field_id, r.row_order, r.row_id));

        let total = rows.len();
        let mut by_entry_field: HashMap<(i64, i64), Vec<Row>> = HashMap::new();
        for row in rows {
            by_entry_field
                .entry((row.entry_id, row.field_id))
                .or_default()
                .push(row);
        }

        Self {
            by_entry_field,
            total,
        }
    }

    /// Rows owned by one (entry, field) pair, in ordinal order
    pub fn rows_for(&self, entry_id: i64, field_id: i64) -> &[Row] {
        self.by_entry_field
            .get(&(entry_id, field_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Convert fetched raw rows into row models.
///
/// Grid tables carry no `field_id` column (the table itself is per-field),
/// so callers pass the owning field as a fallback. Only `col_id_N` slots are
/// kept as raw values; bookkeeping columns land in the row header.
pub fn rows_from_raw(raw_rows: &[RawRow], fallback_field_id: Option<i64>) -> Vec<Row> {
    raw_rows
        .iter()
        .map(|raw| {
            let mut row = Row::new(
                raw.get_i64("row_id").unwrap_or(0),
                raw.get_i64("entry_id").unwrap_or(0),
                raw.get_i64("field_id")
                    .or(fallback_field_id)
                    .unwrap_or(0),
                raw.get_i64("row_order").unwrap_or(0),
            );
            for (key, value) in raw.iter() {
                if key.starts_with(COL_KEY_PREFIX) {
                    row.set_raw(key.clone(), value.clone());
                }
            }
            row
        })
        .collect()
}
