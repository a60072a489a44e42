//! # Matrix Hydrator
//!
//! Preloads every matrix row for the batch in one fetch against
//! `matrix_data`, then assigns each entry's rows under the owning field's
//! name. Cell decoding is left to the scalar hydrators (and the default
//! hydrator), which run after this one in registry order and restrict
//! themselves to their own column types.

use crate::collection::EntryCollection;
use crate::constants::tables;
use crate::error::Result;
use crate::hydrators::{Hydrator, HydratorBase};
use crate::models::{Entry, FieldValue};
use crate::rows::{rows_from_raw, RowSet};
use crate::storage::{RowFetcher, RowFilter};
use async_trait::async_trait;
use tracing::debug;

pub struct MatrixHydrator {
    base: HydratorBase,
    field_ids: Vec<i64>,
    rows: RowSet,
}

impl MatrixHydrator {
    pub fn new(collection: &EntryCollection) -> Self {
        Self {
            base: HydratorBase::new(collection, crate::constants::fieldtypes::MATRIX),
            field_ids: collection.field_ids_of_type(crate::constants::fieldtypes::MATRIX),
            rows: RowSet::default(),
        }
    }
}

#[async_trait]
impl Hydrator for MatrixHydrator {
    fn fieldtype(&self) -> &str {
        self.base.fieldtype()
    }

    async fn preload(&mut self, storage: &dyn RowFetcher, entry_ids: &[i64]) -> Result<()> {
        if !self.field_ids.is_empty() && !entry_ids.is_empty() {
            let filter = RowFilter::for_entries(entry_ids).with_field_ids(&self.field_ids);
            let raw_rows = storage.fetch_rows(tables::MATRIX_DATA, &filter).await?;
            self.rows = RowSet::build(rows_from_raw(&raw_rows, None));
            debug!(
                row_count = self.rows.len(),
                field_count = self.field_ids.len(),
                "Preloaded matrix rows"
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::ColCollection;
    use crate::models::{Channel, Field};
    use crate::repositories::{ChannelRepository, FieldRepository};
    use crate::storage::{MemoryStorage, RawRow};
    use serde_json::json;
    use std::sync::Arc;

    fn collection() -> EntryCollection {
        let fields = FieldRepository::new(vec![Field::new(4, "schedule", "matrix", 100)]);
        let channels = Arc::new(ChannelRepository::new(
            vec![Channel::new(1, "events", 100)],
            &fields,
        ));
        EntryCollection::new(
            vec![Entry::new(10, 1)],
            channels,
            Arc::new(ColCollection::default()),
            Arc::new(ColCollection::default()),
        )
    }

    #[tokio::test]
    async fn test_hydrate_before_preload_fails() {
        let collection = collection();
        let hydrator = MatrixHydrator::new(&collection);
        let mut entry = Entry::new(10, 1);

        let err = hydrator.hydrate(&mut entry).unwrap_err();
        assert!(matches!(
            err,
            crate::error::HydrationError::MissingPreload { .. }
        ));
    }

    #[tokio::test]
    async fn test_rows_are_assigned_under_the_field_name() {
        let storage = MemoryStorage::new().with_table(
            tables::MATRIX_DATA,
            vec![RawRow::new()
                .with("row_id", json!(101))
                .with("entry_id", json!(10))
                .with("field_id", json!(4))
                .with("row_order", json!(0))
                .with("col_id_1", json!("x"))],
        );

        let collection = collection();
        let mut hydrator = MatrixHydrator::new(&collection);
        hydrator.preload(&storage, &[10]).await.unwrap();

        let mut entry = Entry::new(10, 1);
        hydrator.hydrate(&mut entry).unwrap();

        let rows = entry.value("schedule").unwrap().as_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row_id, 101);
    }

    #[tokio::test]
    async fn test_entry_without_rows_gets_an_empty_set() {
        let collection = collection();
        let mut hydrator = MatrixHydrator::new(&collection);
        hydrator.preload(&MemoryStorage::new(), &[10]).await.unwrap();

        let mut entry = Entry::new(10, 1);
        hydrator.hydrate(&mut entry).unwrap();

        let rows = entry.value("schedule").unwrap().as_rows().unwrap();
        assert!(rows.is_empty());
    }
}
