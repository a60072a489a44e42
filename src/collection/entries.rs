//! # Entry Collection
//!
//! The ordered set of entries one hydration run operates on, plus the
//! denormalized lookup indices hydrators need: the distinct fieldtypes
//! present (including matrix/grid column types, so every column type
//! receives a hydrator) and the matrix/grid column collections.
//!
//! Membership is fixed at construction; hydrators mutate the entries inside.

use crate::collection::ColCollection;
use crate::models::Entry;
use crate::repositories::ChannelRepository;
use std::collections::BTreeSet;
use std::sync::Arc;

/// A batch of loaded entries with cross-cutting fieldtype indices.
#[derive(Debug)]
pub struct EntryCollection {
    entries: Vec<Entry>,
    channels: Arc<ChannelRepository>,
    matrix_cols: Arc<ColCollection>,
    grid_cols: Arc<ColCollection>,
    fieldtypes: BTreeSet<String>,
}

impl EntryCollection {
    pub fn new(
        entries: Vec<Entry>,
        channels: Arc<ChannelRepository>,
        matrix_cols: Arc<ColCollection>,
        grid_cols: Arc<ColCollection>,
    ) -> Self {
        let mut fieldtypes = BTreeSet::new();
        for entry in &entries {
            if let Some(channel) = channels.find(entry.channel_id) {
                for tag in channel.fields.fieldtypes() {
                    fieldtypes.insert(tag.to_string());
                }
            }
        }
        for tag in matrix_cols.col_types() {
            fieldtypes.insert(tag.to_string());
        }
        for tag in grid_cols.col_types() {
            fieldtypes.insert(tag.to_string());
        }

        Self {
            entries,
            channels,
            matrix_cols,
            grid_cols,
            fieldtypes,
        }
    }

    /// IDs of all entries in this collection, in collection order
    pub fn entry_ids(&self) -> Vec<i64> {
        self.entries.iter().map(|e| e.entry_id).collect()
    }

    /// Distinct fieldtypes present among this collection's fields and
    /// matrix/grid columns, in deterministic order.
    pub fn fieldtypes(&self) -> &BTreeSet<String> {
        &self.fieldtypes
    }

    /// Whether any field or column in this collection has the fieldtype
    pub fn has_fieldtype(&self, tag: &str) -> bool {
        self.fieldtypes.contains(tag)
    }

    /// IDs of all fields of the given fieldtype across the channels present,
    /// deduplicated, in catalog order.
    pub fn field_ids_of_type(&self, tag: &str) -> Vec<i64> {
        let mut ids = Vec::new();
        let mut seen = BTreeSet::new();
        for entry in &self.entries {
            let Some(channel) = self.channels.find(entry.channel_id) else {
                continue;
            };
            for field in channel.fields.fields_by_type(tag) {
                if seen.insert(field.field_id) {
                    ids.push(field.field_id);
                }
            }
        }
        ids
    }

    pub fn matrix_cols(&self) -> &ColCollection {
        &self.matrix_cols
    }

    pub fn grid_cols(&self) -> &ColCollection {
        &self.grid_cols
    }

    pub fn shared_matrix_cols(&self) -> Arc<ColCollection> {
        Arc::clone(&self.matrix_cols)
    }

    pub fn shared_grid_cols(&self) -> Arc<ColCollection> {
        Arc::clone(&self.grid_cols)
    }

    pub fn shared_channels(&self) -> Arc<ChannelRepository> {
        Arc::clone(&self.channels)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [Entry] {
        &mut self.entries
    }

    /// Entry by ID
    pub fn entry(&self, entry_id: i64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.entry_id == entry_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}
