//! # Hydrators
//!
//! One hydrator per fieldtype family. Each performs an optional bulk
//! preload (one fetch for all entries needing that fieldtype) followed by a
//! per-entry hydrate step that writes decoded [`FieldValue`]s onto the
//! entry — and, for the scalar families, onto every matrix/grid row cell
//! whose column type matches.
//!
//! ## Protocol
//!
//! `preload()` runs exactly once per hydrator per run, strictly before any
//! `hydrate()` call for that fieldtype. Calling `hydrate()` first is a
//! programming error and fails with
//! [`HydrationError::MissingPreload`](crate::HydrationError::MissingPreload).
//! `hydrate()` is idempotent: raw values are never destroyed, so re-running
//! it re-derives the same decoded values.

pub mod date;
pub mod default;
pub mod explode;
pub mod factory;
pub mod file;
pub mod grid;
pub mod matrix;
pub mod pipe;
pub mod wysiwyg;

pub use date::DateHydrator;
pub use default::DefaultHydrator;
pub use explode::ExplodeHydrator;
pub use factory::HydratorFactory;
pub use file::FileHydrator;
pub use grid::GridHydrator;
pub use matrix::MatrixHydrator;
pub use pipe::PipeHydrator;
pub use wysiwyg::WysiwygHydrator;

use crate::collection::{ColCollection, EntryCollection};
use crate::constants::fieldtypes;
use crate::error::{HydrationError, Result};
use crate::models::{Channel, Entry, FieldValue};
use crate::repositories::ChannelRepository;
use crate::storage::RowFetcher;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Per-fieldtype hydration strategy.
#[async_trait]
pub trait Hydrator: Send + Sync {
    /// The fieldtype tag this hydrator serves
    fn fieldtype(&self) -> &str;

    /// Bulk-fetch everything this fieldtype needs for the whole batch.
    ///
    /// At most one bulk fetch per fieldtype per run; side-effect-free on
    /// entries. A no-op for fieldtypes with nothing to prefetch.
    async fn preload(&mut self, storage: &dyn RowFetcher, entry_ids: &[i64]) -> Result<()>;

    /// Assign decoded values onto the entry for every field (and matching
    /// matrix/grid column) of this hydrator's fieldtype.
    fn hydrate(&self, entry: &mut Entry) -> Result<()>;
}

/// Shared state and the field/column decode loop used by every variant.
#[derive(Debug)]
pub(crate) struct HydratorBase {
    fieldtype: String,
    channels: Arc<ChannelRepository>,
    matrix_cols: Arc<ColCollection>,
    grid_cols: Arc<ColCollection>,
    preloaded: bool,
}

impl HydratorBase {
    pub(crate) fn new(collection: &EntryCollection, fieldtype: &str) -> Self {
        Self {
            fieldtype: fieldtype.to_string(),
            channels: collection.shared_channels(),
            matrix_cols: collection.shared_matrix_cols(),
            grid_cols: collection.shared_grid_cols(),
            preloaded: false,
        }
    }

    pub(crate) fn fieldtype(&self) -> &str {
        &self.fieldtype
    }

    pub(crate) fn mark_preloaded(&mut self) {
        self.preloaded = true;
    }

    pub(crate) fn ensure_preloaded(&self) -> Result<()> {
        if self.preloaded {
            Ok(())
        } else {
            Err(HydrationError::missing_preload(&self.fieldtype))
        }
    }

    pub(crate) fn channel_for(&self, entry: &Entry) -> Result<Arc<Channel>> {
        self.channels
            .find(entry.channel_id)
            .ok_or_else(|| HydrationError::channel_not_found(entry.channel_id))
    }

    /// Decode every slot of this fieldtype on the entry: top-level fields,
    /// then matching matrix and grid columns inside already-hydrated rows.
    pub(crate) fn apply_decode<F>(&self, entry: &mut Entry, decode: F) -> Result<()>
    where
        F: Fn(Option<&Value>) -> FieldValue,
    {
        self.ensure_preloaded()?;
        let channel = self.channel_for(entry)?;

        for field in channel.fields.fields_by_type(&self.fieldtype) {
            let decoded = decode(entry.raw_field(field.field_id));
            entry.set_value(field.field_name.clone(), decoded);
        }

        self.apply_to_rows(entry, &channel, fieldtypes::MATRIX, &self.matrix_cols, &decode);
        self.apply_to_rows(entry, &channel, fieldtypes::GRID, &self.grid_cols, &decode);

        Ok(())
    }

    fn apply_to_rows<F>(
        &self,
        entry: &mut Entry,
        channel: &Channel,
        parent_fieldtype: &str,
        cols: &ColCollection,
        decode: &F,
    ) where
        F: Fn(Option<&Value>) -> FieldValue,
    {
        for field in channel.fields.fields_by_type(parent_fieldtype) {
            // A row's column set is restricted to this field's same-typed
            // columns; same-typed columns of other fields are not touched.
            let cols = cols.for_field_and_type(field.field_id, &self.fieldtype);
            if cols.is_empty() {
                continue;
            }
            let Some(rows) = entry.rows_mut(&field.field_name) else {
                continue;
            };
            for row in rows.iter_mut() {
                for col in cols {
                    let decoded = decode(row.raw_col(col.col_id));
                    row.set_value(col.col_name.clone(), decoded);
                }
            }
        }
    }
}
