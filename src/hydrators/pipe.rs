//! # Pipe Hydrator
//!
//! Multi-value fieldtypes (`multi_select`, `checkboxes`) store their
//! selections as a single pipe-delimited string. Decodes to an ordered list
//! of strings; empty or absent raw decodes to an empty list.

use crate::collection::EntryCollection;
use crate::constants::PIPE_DELIMITER;
use crate::error::Result;
use crate::hydrators::{Hydrator, HydratorBase};
use crate::models::{value::scalar_to_string, Entry, FieldValue};
use crate::storage::RowFetcher;
use async_trait::async_trait;
use serde_json::Value;

pub struct PipeHydrator {
    base: HydratorBase,
}

impl PipeHydrator {
    pub fn new(collection: &EntryCollection, fieldtype: &str) -> Self {
        Self {
            base: HydratorBase::new(collection, fieldtype),
        }
    }
}

#[async_trait]
impl Hydrator for PipeHydrator {
    fn fieldtype(&self) -> &str {
        self.base.fieldtype()
    }

    async fn preload(&mut self, _storage: &dyn RowFetcher, _entry_ids: &[i64]) -> Result<()> {
        self.base.mark_preloaded();
        Ok(())
    }

    fn hydrate(&self, entry: &mut Entry) -> Result<()> {
        self.base
            .apply_decode(entry, |raw| decode_delimited(raw, PIPE_DELIMITER))
    }
}

/// Split a delimited multi-value slot into an ordered list.
pub(crate) fn decode_delimited(raw: Option<&Value>, delimiter: char) -> FieldValue {
    let Some(text) = raw.and_then(scalar_to_string) else {
        return FieldValue::List(Vec::new());
    };
    if text.is_empty() {
        return FieldValue::List(Vec::new());
    }
    FieldValue::List(text.split(delimiter).map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pipe_split() {
        let decoded = decode_delimited(Some(&json!("a|b|c")), PIPE_DELIMITER);
        assert_eq!(decoded.as_list().unwrap(), &["a", "b", "c"]);
    }

    #[test]
    fn test_single_value_is_a_one_element_list() {
        let decoded = decode_delimited(Some(&json!("only")), PIPE_DELIMITER);
        assert_eq!(decoded.as_list().unwrap(), &["only"]);
    }

    #[test]
    fn test_empty_and_absent_decode_to_empty_list() {
        assert_eq!(
            decode_delimited(Some(&json!("")), PIPE_DELIMITER),
            FieldValue::List(Vec::new())
        );
        assert_eq!(
            decode_delimited(None, PIPE_DELIMITER),
            FieldValue::List(Vec::new())
        );
    }
}
