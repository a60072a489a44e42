//! # Default Hydrator
//!
//! Pass-through strategy for fieldtypes without a registered hydrator: the
//! raw value is copied unchanged into the named slot, for top-level fields
//! and matrix/grid columns alike. Absent raw values decode to null.

use crate::collection::EntryCollection;
use crate::error::Result;
use crate::hydrators::{Hydrator, HydratorBase};
use crate::models::{Entry, FieldValue};
use crate::storage::RowFetcher;
use async_trait::async_trait;

pub struct DefaultHydrator {
    base: HydratorBase,
}

impl DefaultHydrator {
    pub fn new(collection: &EntryCollection, fieldtype: &str) -> Self {
        Self {
            base: HydratorBase::new(collection, fieldtype),
        }
    }
}

#[async_trait]
impl Hydrator for DefaultHydrator {
    fn fieldtype(&self) -> &str {
        self.base.fieldtype()
    }

    async fn preload(&mut self, _storage: &dyn RowFetcher, _entry_ids: &[i64]) -> Result<()> {
        self.base.mark_preloaded();
        Ok(())
    }

    fn hydrate(&self, entry: &mut Entry) -> Result<()> {
        self.base.apply_decode(entry, |raw| match raw {
            Some(value) => FieldValue::Raw(value.clone()),
            None => FieldValue::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::ColCollection;
    use crate::models::{Channel, Field};
    use crate::repositories::{ChannelRepository, FieldRepository};
    use crate::storage::MemoryStorage;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_raw_value_is_copied_verbatim() {
        let fields = FieldRepository::new(vec![Field::new(8, "color", "swatch", 100)]);
        let channels = Arc::new(ChannelRepository::new(
            vec![Channel::new(1, "events", 100)],
            &fields,
        ));
        let collection = EntryCollection::new(
            vec![],
            channels,
            Arc::new(ColCollection::default()),
            Arc::new(ColCollection::default()),
        );

        let mut hydrator = DefaultHydrator::new(&collection, "swatch");
        hydrator.preload(&MemoryStorage::new(), &[]).await.unwrap();

        let mut entry = Entry::new(10, 1);
        entry.set_raw("field_id_8", json!("#ff0000"));
        hydrator.hydrate(&mut entry).unwrap();

        assert_eq!(
            entry.value("color").unwrap(),
            &FieldValue::Raw(json!("#ff0000"))
        );
    }
}
