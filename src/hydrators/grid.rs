//! # Grid Hydrator
//!
//! Grid rows live in one table per field (`channel_grid_field_{id}`), so
//! preload performs one fetch per grid field present in the collection —
//! still bulk across all entries — and merges the results into a single
//! canonically-ordered row set. Hydration mirrors the matrix hydrator.

use crate::collection::EntryCollection;
use crate::constants::tables;
use crate::error::Result;
use crate::hydrators::{Hydrator, HydratorBase};
use crate::models::{Entry, FieldValue};
use crate::rows::{rows_from_raw, RowSet};
use crate::storage::{RowFetcher, RowFilter};
use async_trait::async_trait;
use tracing::debug;

pub struct GridHydrator {
    base: HydratorBase,
    field_ids: Vec<i64>,
    rows: RowSet,
}

impl GridHydrator {
    pub fn new(collection: &EntryCollection) -> Self {
        Self {
            base: HydratorBase::new(collection, crate::constants::fieldtypes::GRID),
            field_ids: collection.field_ids_of_type(crate::constants::fieldtypes::GRID),
            rows: RowSet::default(),
        }
    }
}

#[async_trait]
impl Hydrator for GridHydrator {
    fn fieldtype(&self) -> &str {
        self.base.fieldtype()
    }

    async fn preload(&mut self, storage: &dyn RowFetcher, entry_ids: &[i64]) -> Result<()> {
        if !self.field_ids.is_empty() && !entry_ids.is_empty() {
            let filter = RowFilter::for_entries(entry_ids);
            let mut rows = Vec::new();
            for &field_id in &self.field_ids {
                let table = tables::grid_data_table(field_id);
                let raw_rows = storage.fetch_rows(&table, &filter).await?;
                // Grid tables carry no field_id column; the table implies it.
                rows.extend(rows_from_raw(&raw_rows, Some(field_id)));
            }
            self.rows = RowSet::build(rows);
            debug!(
                row_count = self.rows.len(),
                field_count = self.field_ids.len(),
                "Preloaded grid rows"
            );
        }
        self.base.mark_preloaded();
        Ok(())
    }

    fn hydrate(&self, entry: &mut Entry) -> Result<()> {
        self.base.ensure_preloaded()?;
        let channel = self.base.channel_for(entry)?;

        for field in channel.fields.fields_by_type(self.base.fieldtype()) {
            let rows = self.rows.rows_for(entry.entry_id, field.field_id).to_vec();
            entry.set_value(field.field_name.clone(), FieldValue::Rows(rows));
        }

        Ok(())
    }
}
