//! # Explode Hydrator
//!
//! The fieldpack multi-value variants (`fieldpack_checkboxes`,
//! `fieldpack_multiselect`, `fieldpack_list`) store one value per line
//! rather than pipe-delimited. Same contract as the pipe family: ordered
//! list of strings, empty raw decodes to an empty list.

use crate::collection::EntryCollection;
use crate::constants::EXPLODE_DELIMITER;
use crate::error::Result;
use crate::hydrators::pipe::decode_delimited;
use crate::hydrators::{Hydrator, HydratorBase};
use crate::models::Entry;
use crate::storage::RowFetcher;
use async_trait::async_trait;

pub struct ExplodeHydrator {
    base: HydratorBase,
}

impl ExplodeHydrator {
    pub fn new(collection: &EntryCollection, fieldtype: &str) -> Self {
        Self {
            base: HydratorBase::new(collection, fieldtype),
        }
    }
}

#[async_trait]
impl Hydrator for ExplodeHydrator {
    fn fieldtype(&self) -> &str {
        self.base.fieldtype()
    }

    async fn preload(&mut self, _storage: &dyn RowFetcher, _entry_ids: &[i64]) -> Result<()> {
        self.base.mark_preloaded();
        Ok(())
    }

    fn hydrate(&self, entry: &mut Entry) -> Result<()> {
        self.base
            .apply_decode(entry, |raw| decode_delimited(raw, EXPLODE_DELIMITER))
    }
}
