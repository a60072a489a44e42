//! # Date Hydrator
//!
//! Raw values are signed integer epoch timestamps in seconds, stored as
//! text. Empty or malformed raw values decode to null; the rule applies
//! uniformly to top-level fields, matrix columns and grid columns.

use crate::collection::EntryCollection;
use crate::error::Result;
use crate::hydrators::{Hydrator, HydratorBase};
use crate::models::{value::scalar_to_string, Entry, FieldValue};
use crate::storage::RowFetcher;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tracing::debug;

pub struct DateHydrator {
    base: HydratorBase,
}

impl DateHydrator {
    pub fn new(collection: &EntryCollection, fieldtype: &str) -> Self {
        Self {
            base: HydratorBase::new(collection, fieldtype),
        }
    }
}

#[async_trait]
impl Hydrator for DateHydrator {
    fn fieldtype(&self) -> &str {
        self.base.fieldtype()
    }

    async fn preload(&mut self, _storage: &dyn RowFetcher, _entry_ids: &[i64]) -> Result<()> {
        // Date values live inline in the entry/row slots.
        self.base.mark_preloaded();
        Ok(())
    }

    fn hydrate(&self, entry: &mut Entry) -> Result<()> {
        self.base.apply_decode(entry, decode_date)
    }
}

/// Decode an epoch-seconds slot, degrading to null on malformed input.
pub(crate) fn decode_date(raw: Option<&Value>) -> FieldValue {
    let Some(text) = raw.and_then(scalar_to_string) else {
        return FieldValue::Null;
    };
    let text = text.trim();
    if text.is_empty() {
        return FieldValue::Null;
    }

    match text.parse::<i64>() {
        Ok(seconds) => match Utc.timestamp_opt(seconds, 0).single() {
            Some(dt) => FieldValue::Date(dt),
            None => {
                debug!(raw = %text, "Epoch seconds out of range; decoding to null");
                FieldValue::Null
            }
        },
        Err(_) => {
            debug!(raw = %text, "Malformed epoch timestamp; decoding to null");
            FieldValue::Null
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_epoch_round_trip() {
        let decoded = decode_date(Some(&json!("1700000000")));
        assert_eq!(decoded.as_date().unwrap().timestamp(), 1_700_000_000);

        // Numeric storage decodes identically.
        let decoded = decode_date(Some(&json!(1_700_000_000)));
        assert_eq!(decoded.as_date().unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_pre_epoch_dates() {
        let decoded = decode_date(Some(&json!("-86400")));
        assert_eq!(decoded.as_date().unwrap().timestamp(), -86_400);
    }

    #[test]
    fn test_empty_and_absent_decode_to_null() {
        assert_eq!(decode_date(Some(&json!(""))), FieldValue::Null);
        assert_eq!(decode_date(None), FieldValue::Null);
        assert_eq!(decode_date(Some(&json!(null))), FieldValue::Null);
    }

    #[test]
    fn test_malformed_decodes_to_null() {
        assert_eq!(decode_date(Some(&json!("not-a-date"))), FieldValue::Null);
    }
}
