//! # System Constants
//!
//! Fieldtype tags, storage key prefixes and legacy table names that define
//! the operational boundaries of the hydration engine.
//!
//! This module maintains compatibility with the legacy CMS schema while
//! providing type-safe Rust equivalents of its magic strings.

/// Fieldtype tags recognized by the built-in hydrator registration table.
///
/// Fieldtypes not listed here fall through to the default pass-through
/// hydrator.
pub mod fieldtypes {
    pub const MATRIX: &str = "matrix";
    pub const GRID: &str = "grid";
    pub const DATE: &str = "date";
    pub const FILE: &str = "file";
    pub const MULTI_SELECT: &str = "multi_select";
    pub const CHECKBOXES: &str = "checkboxes";
    pub const FIELDPACK_CHECKBOXES: &str = "fieldpack_checkboxes";
    pub const FIELDPACK_MULTISELECT: &str = "fieldpack_multiselect";
    pub const FIELDPACK_LIST: &str = "fieldpack_list";
    pub const WYSIWYG: &str = "wygwam";
}

/// Legacy storage table names consumed through the `RowFetcher` collaborator.
pub mod tables {
    pub const CHANNEL_TITLES: &str = "channel_titles";
    pub const CHANNEL_DATA: &str = "channel_data";
    pub const MATRIX_COLS: &str = "matrix_cols";
    pub const MATRIX_DATA: &str = "matrix_data";
    pub const GRID_COLS: &str = "grid_columns";

    /// Grid rows live in one table per field: `channel_grid_field_{field_id}`.
    pub const GRID_DATA_PREFIX: &str = "channel_grid_field_";

    /// Table name for the grid data table of a field
    pub fn grid_data_table(field_id: i64) -> String {
        format!("{GRID_DATA_PREFIX}{field_id}")
    }
}

/// Raw storage key prefix for top-level field slots (`field_id_42`).
pub const FIELD_KEY_PREFIX: &str = "field_id_";

/// Raw storage key prefix for matrix/grid column slots (`col_id_7`).
pub const COL_KEY_PREFIX: &str = "col_id_";

/// Delimiter for the pipe fieldtype family (multi_select, checkboxes).
pub const PIPE_DELIMITER: char = '|';

/// Delimiter for the explode fieldtype family (fieldpack variants).
pub const EXPLODE_DELIMITER: char = '\n';

/// Raw storage key for a top-level field slot
pub fn field_key(field_id: i64) -> String {
    format!("{FIELD_KEY_PREFIX}{field_id}")
}

/// Raw storage key for a matrix/grid column slot
pub fn col_key(col_id: i64) -> String {
    format!("{COL_KEY_PREFIX}{col_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys() {
        assert_eq!(field_key(42), "field_id_42");
        assert_eq!(col_key(7), "col_id_7");
        assert_eq!(tables::grid_data_table(12), "channel_grid_field_12");
    }
}
