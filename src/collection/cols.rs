//! # Column Collection
//!
//! Insertion-ordered collection of matrix/grid [`Col`] definitions with a
//! per-run (field ID, column type) index, so hydrators can pick out exactly
//! the same-typed columns belonging to one repeatable field without
//! re-scanning.

use crate::models::Col;
use std::collections::HashMap;
use std::sync::Arc;

/// Collection of matrix or grid column definitions.
#[derive(Debug, Clone, Default)]
pub struct ColCollection {
    cols: Vec<Arc<Col>>,
    by_field_and_type: HashMap<(i64, String), Vec<Arc<Col>>>,
}

impl ColCollection {
    pub fn new(cols: Vec<Col>) -> Self {
        let mut collection = Self::default();
        for col in cols {
            let col = Arc::new(col);
            collection
                .by_field_and_type
                .entry((col.field_id, col.col_type.clone()))
                .or_default()
                .push(Arc::clone(&col));
            collection.cols.push(col);
        }
        collection
    }

    /// Columns of one repeatable field with the given column type, in
    /// insertion order.
    ///
    /// Columns belonging to other fields are never returned, even when
    /// same-typed.
    pub fn for_field_and_type(&self, field_id: i64, col_type: &str) -> &[Arc<Col>] {
        self.by_field_and_type
            .get(&(field_id, col_type.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Distinct column-type tags present, in insertion order
    pub fn col_types(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for col in &self.cols {
            if !seen.contains(&col.col_type.as_str()) {
                seen.push(col.col_type.as_str());
            }
        }
        seen
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Col>> {
        self.cols.iter()
    }

    pub fn len(&self) -> usize {
        self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cols() -> Vec<Col> {
        vec![
            Col::new(1, "when", "date", 10),
            Col::new(2, "tags", "multi_select", 10),
            Col::new(3, "when", "date", 11),
            Col::new(4, "until", "date", 10),
        ]
    }

    #[test]
    fn test_filter_is_scoped_to_one_field() {
        let cols = ColCollection::new(sample_cols());

        let field_10_dates: Vec<i64> = cols
            .for_field_and_type(10, "date")
            .iter()
            .map(|c| c.col_id)
            .collect();
        assert_eq!(field_10_dates, vec![1, 4]);

        // Same-typed column of another field is not included.
        let field_11_dates: Vec<i64> = cols
            .for_field_and_type(11, "date")
            .iter()
            .map(|c| c.col_id)
            .collect();
        assert_eq!(field_11_dates, vec![3]);
    }

    #[test]
    fn test_col_types() {
        let cols = ColCollection::new(sample_cols());
        assert_eq!(cols.col_types(), vec!["date", "multi_select"]);
    }
}
