//! # Field Model
//!
//! A field is a named, typed custom attribute defined for a field group.
//! Fields are immutable after load and are looked up both by numeric ID and
//! by name.
//!
//! Maps to the `channel_fields` table in the legacy schema.

use serde::{Deserialize, Serialize};

/// A custom field definition belonging to one field group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub field_id: i64,
    pub field_name: String,
    /// Fieldtype tag determining how raw values are decoded (`date`,
    /// `matrix`, `wygwam`, ...).
    pub field_type: String,
    pub group_id: i64,
}

impl Field {
    pub fn new(
        field_id: i64,
        field_name: impl Into<String>,
        field_type: impl Into<String>,
        group_id: i64,
    ) -> Self {
        Self {
            field_id,
            field_name: field_name.into(),
            field_type: field_type.into(),
            group_id,
        }
    }
}
