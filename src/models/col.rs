//! # Column Model
//!
//! A column is a typed slot inside a repeatable matrix/grid row, analogous
//! to a [`Field`](super::Field) but scoped to one repeatable field. Many
//! columns belong to one field.
//!
//! Maps to the `matrix_cols` / `grid_columns` tables in the legacy schema.

use serde::{Deserialize, Serialize};

/// A matrix/grid sub-field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Col {
    pub col_id: i64,
    pub col_name: String,
    /// Column-type tag; decoded with the same rules as the matching
    /// fieldtype tag.
    pub col_type: String,
    /// The repeatable field owning this column.
    pub field_id: i64,
}

impl Col {
    pub fn new(
        col_id: i64,
        col_name: impl Into<String>,
        col_type: impl Into<String>,
        field_id: i64,
    ) -> Self {
        Self {
            col_id,
            col_name: col_name.into(),
            col_type: col_type.into(),
            field_id,
        }
    }
}
