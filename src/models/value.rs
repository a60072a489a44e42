//! # Field Value
//!
//! Tagged union of decoded field values. Each hydrator variant produces and
//! matches on its own kind only; the `Raw` kind carries values that no
//! registered hydrator claimed.

use crate::models::Row;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// A decoded, typed field or column value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent or empty value.
    Null,
    /// Plain or WYSIWYG-parsed text.
    Text(String),
    /// Decoded epoch timestamp.
    Date(DateTime<Utc>),
    /// Ordered multi-value selection.
    List(Vec<String>),
    /// Resolved file URL.
    Url(String),
    /// Repeatable matrix/grid rows.
    Rows(Vec<Row>),
    /// Raw value copied verbatim by the default hydrator.
    Raw(Value),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            _ => None,
        }
    }

    pub fn as_rows(&self) -> Option<&[Row]> {
        match self {
            Self::Rows(rows) => Some(rows),
            _ => None,
        }
    }

    /// Project this value into plain JSON for output serialization.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Text(s) => Value::String(s.clone()),
            Self::Date(dt) => Value::String(dt.to_rfc3339()),
            Self::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            Self::Url(url) => Value::String(url.clone()),
            Self::Rows(rows) => Value::Array(rows.iter().map(Row::to_output).collect()),
            Self::Raw(value) => value.clone(),
        }
    }
}

/// Render a raw scalar as a string for decoding.
///
/// Returns `None` for JSON null; numbers and booleans are rendered in their
/// canonical string form since the legacy schema stores everything as text.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // Arrays/objects never appear in legacy scalar slots.
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_to_string() {
        assert_eq!(scalar_to_string(&json!(null)), None);
        assert_eq!(scalar_to_string(&json!("a|b")), Some("a|b".to_string()));
        assert_eq!(
            scalar_to_string(&json!(1700000000)),
            Some("1700000000".to_string())
        );
    }

    #[test]
    fn test_to_json_projections() {
        assert_eq!(FieldValue::Null.to_json(), json!(null));
        assert_eq!(
            FieldValue::List(vec!["a".into(), "b".into()]).to_json(),
            json!(["a", "b"])
        );
        assert_eq!(
            FieldValue::Url("/uploads/x.jpg".into()).to_json(),
            json!("/uploads/x.jpg")
        );
    }
}
