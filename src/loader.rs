//! # Entry Loader
//!
//! ## Overview
//!
//! The driver for one hydration run. Given a set of entry IDs it:
//!
//! 1. Bulk-fetches entry identity (`channel_titles`) and raw field slots
//!    (`channel_data`) and merges them into [`Entry`] models
//! 2. Bulk-fetches matrix/grid column definitions for the fields present
//! 3. Builds the [`EntryCollection`] and one hydrator per distinct fieldtype
//! 4. Runs every preload (concurrently, each is independent), then hydrates
//!    entries sequentially
//!
//! Preload happens exactly once per hydrator per run; no per-entry fetches
//! occur during hydration. Hydration failures on one entry abort the run,
//! since a partially hydrated batch is worse than a failed one.

use crate::collection::{ColCollection, EntryCollection};
use crate::config::EntriesConfig;
use crate::constants::{tables, FIELD_KEY_PREFIX};
use crate::error::{HydrationError, Result};
use crate::hydrators::HydratorFactory;
use crate::logging::log_hydration_run;
use crate::models::{Col, Entry};
use crate::repositories::ChannelRepository;
use crate::storage::{RawRow, RowFetcher, RowFilter};
use futures::future::try_join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, warn};

/// Loads entry batches and drives the preload/hydrate pipeline.
pub struct EntryLoader {
    storage: Arc<dyn RowFetcher>,
    channels: Arc<ChannelRepository>,
    factory: HydratorFactory,
    config: EntriesConfig,
}

impl EntryLoader {
    pub fn new(
        storage: Arc<dyn RowFetcher>,
        channels: Arc<ChannelRepository>,
        factory: HydratorFactory,
        config: EntriesConfig,
    ) -> Self {
        Self {
            storage,
            channels,
            factory,
            config,
        }
    }

    /// Load and hydrate the given entries.
    ///
    /// The returned collection's entries carry decoded values for every
    /// field of every fieldtype present; raw slots stay intact alongside.
    pub async fn load(&self, entry_ids: &[i64]) -> Result<EntryCollection> {
        if entry_ids.len() > self.config.max_batch_size {
            return Err(HydrationError::configuration(format!(
                "Batch of {} entries exceeds the configured maximum of {}",
                entry_ids.len(),
                self.config.max_batch_size
            )));
        }

        log_hydration_run("load", entry_ids.len(), 0, "started", None);

        let entries = self.fetch_entries(entry_ids).await?;
        let (matrix_cols, grid_cols) = self.fetch_cols(&entries).await?;

        let mut collection = EntryCollection::new(
            entries,
            Arc::clone(&self.channels),
            Arc::new(matrix_cols),
            Arc::new(grid_cols),
        );

        self.hydrate_collection(&mut collection).await?;

        log_hydration_run(
            "load",
            collection.len(),
            collection.fieldtypes().len(),
            "completed",
            None,
        );

        Ok(collection)
    }

    /// Run every hydrator preload, then hydrate each entry in place.
    pub async fn hydrate_collection(&self, collection: &mut EntryCollection) -> Result<()> {
        let mut hydrators = self.factory.hydrators_for(collection);
        let entry_ids = collection.entry_ids();

        try_join_all(
            hydrators
                .iter_mut()
                .map(|hydrator| hydrator.preload(self.storage.as_ref(), &entry_ids)),
        )
        .await?;

        for entry in collection.entries_mut() {
            for hydrator in &hydrators {
                if let Err(e) = hydrator.hydrate(entry) {
                    error!(
                        entry_id = entry.entry_id,
                        fieldtype = hydrator.fieldtype(),
                        error = %e,
                        "Hydration failed"
                    );
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    /// Fetch identity and raw field slots and merge them into entries,
    /// ordered by entry ID.
    async fn fetch_entries(&self, entry_ids: &[i64]) -> Result<Vec<Entry>> {
        let filter = RowFilter::for_entries(entry_ids);

        let title_rows = self
            .storage
            .fetch_rows(tables::CHANNEL_TITLES, &filter)
            .await?;
        let data_rows = self
            .storage
            .fetch_rows(tables::CHANNEL_DATA, &filter)
            .await?;

        let mut entries: HashMap<i64, Entry> = HashMap::new();
        for row in &title_rows {
            let (Some(entry_id), Some(channel_id)) =
                (row.get_i64("entry_id"), row.get_i64("channel_id"))
            else {
                warn!("Skipping title row without entry_id/channel_id");
                continue;
            };
            let mut entry = Entry::new(entry_id, channel_id);
            if let Some(title) = row.get_str("title") {
                entry = entry.with_title(title);
            }
            if let Some(url_title) = row.get_str("url_title") {
                entry = entry.with_url_title(url_title);
            }
            entries.insert(entry_id, entry);
        }

        for row in &data_rows {
            let Some(entry_id) = row.get_i64("entry_id") else {
                warn!("Skipping data row without entry_id");
                continue;
            };
            let Some(entry) = entries.get_mut(&entry_id) else {
                // Data without a title row is orphaned storage.
                warn!(entry_id, "Skipping data row for unknown entry");
                continue;
            };
            for (key, value) in row.iter() {
                if key.starts_with(FIELD_KEY_PREFIX) {
                    entry.set_raw(key.clone(), value.clone());
                }
            }
        }

        let mut entries: Vec<Entry> = entries.into_values().collect();
        entries.sort_by_key(|e| e.entry_id);
        Ok(entries)
    }

    /// Fetch matrix and grid column definitions for the fields the loaded
    /// entries can carry.
    async fn fetch_cols(&self, entries: &[Entry]) -> Result<(ColCollection, ColCollection)> {
        let matrix_field_ids =
            self.field_ids_of_type(entries, crate::constants::fieldtypes::MATRIX);
        let grid_field_ids = self.field_ids_of_type(entries, crate::constants::fieldtypes::GRID);

        let matrix_cols = if matrix_field_ids.is_empty() {
            ColCollection::default()
        } else {
            let rows = self
                .storage
                .fetch_rows(tables::MATRIX_COLS, &RowFilter::for_fields(&matrix_field_ids))
                .await?;
            ColCollection::new(cols_from_raw(&rows))
        };

        let grid_cols = if grid_field_ids.is_empty() {
            ColCollection::default()
        } else {
            let rows = self
                .storage
                .fetch_rows(tables::GRID_COLS, &RowFilter::for_fields(&grid_field_ids))
                .await?;
            ColCollection::new(cols_from_raw(&rows))
        };

        Ok((matrix_cols, grid_cols))
    }

    fn field_ids_of_type(&self, entries: &[Entry], tag: &str) -> Vec<i64> {
        let mut ids = Vec::new();
        for entry in entries {
            let Some(channel) = self.channels.find(entry.channel_id) else {
                continue;
            };
            for field in channel.fields.fields_by_type(tag) {
                if !ids.contains(&field.field_id) {
                    ids.push(field.field_id);
                }
            }
        }
        ids
    }
}

/// Decode column definition rows from `matrix_cols` / `grid_columns`.
fn cols_from_raw(rows: &[RawRow]) -> Vec<Col> {
    let mut cols = Vec::with_capacity(rows.len());
    for row in rows {
        let (Some(col_id), Some(field_id)) = (row.get_i64("col_id"), row.get_i64("field_id"))
        else {
            warn!("Skipping column row without col_id/field_id");
            continue;
        };
        let col_name = row.get_str("col_name").unwrap_or_default();
        let col_type = row.get_str("col_type").unwrap_or("text");
        cols.push(Col::new(col_id, col_name, col_type, field_id));
    }
    cols
}
