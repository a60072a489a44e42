//! # WYSIWYG Hydrator
//!
//! Rich-text content embeds placeholder tokens that must be resolved
//! against site state before the text is usable:
//!
//! - `{page_N}` — replaced with the page URI of entry N; left verbatim when
//!   the site repository has no page for it
//! - `{filedir_N}` — replaced with upload location N's public URL; left
//!   verbatim on a miss
//! - `{assets_N:literal}` — replaced with the literal segment directly
//!
//! Every occurrence is replaced independently. Token patterns cannot
//! overlap, so replacement order across token kinds does not change the
//! result.

use crate::collection::EntryCollection;
use crate::error::Result;
use crate::hydrators::{Hydrator, HydratorBase};
use crate::models::{value::scalar_to_string, Entry, FieldValue};
use crate::repositories::{SiteRepository, UploadLocationRepository};
use crate::storage::RowFetcher;
use async_trait::async_trait;
use regex::{Captures, Regex};
use std::sync::{Arc, OnceLock};

fn page_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{page_(\d+)\}").expect("valid page token regex"))
}

fn filedir_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{filedir_(\d+)\}").expect("valid filedir token regex"))
}

fn assets_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{assets_\d+:([^}]*)\}").expect("valid assets token regex"))
}

/// Resolve all embedded tokens in one WYSIWYG string.
///
/// Lookup misses leave the token in place; this is policy, not an error.
pub fn parse_tokens(
    value: &str,
    sites: &dyn SiteRepository,
    uploads: &dyn UploadLocationRepository,
) -> String {
    let value = page_re().replace_all(value, |caps: &Captures| {
        caps[1]
            .parse::<i64>()
            .ok()
            .and_then(|entry_id| sites.page_uri(entry_id))
            .unwrap_or_else(|| caps[0].to_string())
    });

    let value = filedir_re().replace_all(&value, |caps: &Captures| {
        caps[1]
            .parse::<i64>()
            .ok()
            .and_then(|id| uploads.find(id))
            .map(|location| location.url)
            .unwrap_or_else(|| caps[0].to_string())
    });

    let value = assets_re().replace_all(&value, |caps: &Captures| caps[1].to_string());

    value.into_owned()
}

pub struct WysiwygHydrator {
    base: HydratorBase,
    sites: Arc<dyn SiteRepository>,
    uploads: Arc<dyn UploadLocationRepository>,
}

impl WysiwygHydrator {
    pub fn new(
        collection: &EntryCollection,
        fieldtype: &str,
        sites: Arc<dyn SiteRepository>,
        uploads: Arc<dyn UploadLocationRepository>,
    ) -> Self {
        Self {
            base: HydratorBase::new(collection, fieldtype),
            sites,
            uploads,
        }
    }
}

#[async_trait]
impl Hydrator for WysiwygHydrator {
    fn fieldtype(&self) -> &str {
        self.base.fieldtype()
    }

    async fn preload(&mut self, _storage: &dyn RowFetcher, _entry_ids: &[i64]) -> Result<()> {
        // Token targets resolve through the preloaded repositories.
        self.base.mark_preloaded();
        Ok(())
    }

    fn hydrate(&self, entry: &mut Entry) -> Result<()> {
        self.base.apply_decode(entry, |raw| {
            let text = raw.and_then(scalar_to_string).unwrap_or_default();
            FieldValue::Text(parse_tokens(&text, self.sites.as_ref(), self.uploads.as_ref()))
        })
    }
}
