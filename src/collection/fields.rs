//! # Field Metadata Catalog
//!
//! Insertion-ordered collection of [`Field`] definitions with a by-name
//! index, answering "which fields of type T exist in this field group".
//!
//! ## Duplicate names
//!
//! Field names are expected to be unique within a field group, but real
//! legacy schemas violate this. Rather than refusing to load such schemas,
//! construction warns and applies last-write-wins on the name index; the
//! insertion-ordered sequence keeps every definition.

use crate::error::{HydrationError, Result};
use crate::models::Field;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Catalog of field definitions for one field group.
#[derive(Debug, Clone, Default)]
pub struct FieldCollection {
    fields: Vec<Arc<Field>>,
    by_name: HashMap<String, Arc<Field>>,
}

impl FieldCollection {
    pub fn new(fields: Vec<Field>) -> Self {
        let mut collection = Self::default();
        for field in fields {
            collection.push(field);
        }
        collection
    }

    /// Append a field, indexing it by name (last write wins on duplicates)
    pub fn push(&mut self, field: Field) {
        let field = Arc::new(field);
        if let Some(existing) = self.by_name.get(&field.field_name) {
            warn!(
                field_name = %field.field_name,
                kept_field_id = field.field_id,
                shadowed_field_id = existing.field_id,
                "Duplicate field name in group; name index now resolves to the later definition"
            );
        }
        self.by_name
            .insert(field.field_name.clone(), Arc::clone(&field));
        self.fields.push(field);
    }

    /// Whether this catalog has a field with the given name
    pub fn has_field(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Field ID for the given field name
    pub fn field_id(&self, name: &str) -> Result<i64> {
        self.by_name
            .get(name)
            .map(|field| field.field_id)
            .ok_or_else(|| HydrationError::field_not_found(name))
    }

    /// Field definition for the given field name
    pub fn field(&self, name: &str) -> Option<&Arc<Field>> {
        self.by_name.get(name)
    }

    /// All fields of the given fieldtype, in insertion order
    pub fn fields_by_type<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Arc<Field>> {
        self.fields.iter().filter(move |f| f.field_type == tag)
    }

    /// Distinct fieldtype tags present in this catalog, in insertion order
    pub fn fieldtypes(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for field in &self.fields {
            if !seen.contains(&field.field_type.as_str()) {
                seen.push(field.field_type.as_str());
            }
        }
        seen
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Field>> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> Vec<Field> {
        vec![
            Field::new(1, "event_date", "date", 1),
            Field::new(2, "body", "wygwam", 1),
            Field::new(3, "end_date", "date", 1),
        ]
    }

    #[test]
    fn test_fields_by_type_preserves_insertion_order() {
        let catalog = FieldCollection::new(sample_fields());
        let dates: Vec<i64> = catalog.fields_by_type("date").map(|f| f.field_id).collect();
        assert_eq!(dates, vec![1, 3]);
    }

    #[test]
    fn test_field_lookup() {
        let catalog = FieldCollection::new(sample_fields());
        assert!(catalog.has_field("body"));
        assert!(!catalog.has_field("missing"));
        assert_eq!(catalog.field_id("body").unwrap(), 2);
        assert!(matches!(
            catalog.field_id("missing"),
            Err(HydrationError::FieldNotFound { .. })
        ));
    }

    #[test]
    fn test_duplicate_names_are_last_write_wins() {
        let catalog = FieldCollection::new(vec![
            Field::new(1, "body", "wygwam", 1),
            Field::new(2, "body", "date", 1),
        ]);
        // Name index resolves to the later definition; the ordered sequence
        // keeps both.
        assert_eq!(catalog.field_id("body").unwrap(), 2);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_fieldtypes_distinct() {
        let catalog = FieldCollection::new(sample_fields());
        assert_eq!(catalog.fieldtypes(), vec!["date", "wygwam"]);
    }
}
