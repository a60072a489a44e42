//! # File Hydrator
//!
//! File fields store an internal reference of the form
//! `{filedir_N}filename.ext`. The upload-location repository resolves the
//! directory ID to its public base URL; an unresolved or unparseable
//! reference decodes to null, never an error.

use crate::collection::EntryCollection;
use crate::error::Result;
use crate::hydrators::{Hydrator, HydratorBase};
use crate::models::{value::scalar_to_string, Entry, FieldValue};
use crate::repositories::UploadLocationRepository;
use crate::storage::RowFetcher;
use async_trait::async_trait;
use regex::Regex;
use std::sync::{Arc, OnceLock};

fn file_reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\{filedir_(\d+)\}(.*)$").expect("valid file reference regex"))
}

pub struct FileHydrator {
    base: HydratorBase,
    uploads: Arc<dyn UploadLocationRepository>,
}

impl FileHydrator {
    pub fn new(
        collection: &EntryCollection,
        fieldtype: &str,
        uploads: Arc<dyn UploadLocationRepository>,
    ) -> Self {
        Self {
            base: HydratorBase::new(collection, fieldtype),
            uploads,
        }
    }

    fn decode(&self, raw: Option<&serde_json::Value>) -> FieldValue {
        let Some(reference) = raw.and_then(scalar_to_string) else {
            return FieldValue::Null;
        };
        let Some(caps) = file_reference_re().captures(&reference) else {
            return FieldValue::Null;
        };
        let location = caps[1]
            .parse::<i64>()
            .ok()
            .and_then(|id| self.uploads.find(id));
        match location {
            Some(location) => FieldValue::Url(format!("{}{}", location.url, &caps[2])),
            None => FieldValue::Null,
        }
    }
}

#[async_trait]
impl Hydrator for FileHydrator {
    fn fieldtype(&self) -> &str {
        self.base.fieldtype()
    }

    async fn preload(&mut self, _storage: &dyn RowFetcher, _entry_ids: &[i64]) -> Result<()> {
        // File references resolve through the preloaded upload-location
        // repository; nothing to fetch per batch.
        self.base.mark_preloaded();
        Ok(())
    }

    /// File fields hydrate top-level slots only; the matrix/grid recursion
    /// families are the scalar decoders.
    fn hydrate(&self, entry: &mut Entry) -> Result<()> {
        self.base.ensure_preloaded()?;
        let channel = self.base.channel_for(entry)?;

        for field in channel.fields.fields_by_type(self.base.fieldtype()) {
            let decoded = self.decode(entry.raw_field(field.field_id));
            entry.set_value(field.field_name.clone(), decoded);
        }

        Ok(())
    }
}
