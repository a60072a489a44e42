//! # Hydrator Factory
//!
//! Maps fieldtype tags to hydrator constructors through a static
//! registration table — no reflection, no dynamic class lookup. Fieldtypes
//! present in a collection but absent from the table fall through to the
//! pass-through [`DefaultHydrator`].
//!
//! The factory owns the shared repository dependencies and injects them
//! into the few hydrators that need them (file, wysiwyg).
//!
//! Registration order is the hydrate application order: matrix and grid
//! come first so that rows exist before the scalar hydrators decode their
//! cells.

use crate::collection::EntryCollection;
use crate::constants::fieldtypes::{
    CHECKBOXES, DATE, FIELDPACK_CHECKBOXES, FIELDPACK_LIST, FIELDPACK_MULTISELECT, FILE, GRID,
    MATRIX, MULTI_SELECT, WYSIWYG,
};
use crate::hydrators::{
    DateHydrator, DefaultHydrator, ExplodeHydrator, FileHydrator, GridHydrator, Hydrator,
    MatrixHydrator, PipeHydrator, WysiwygHydrator,
};
use crate::repositories::{SiteRepository, UploadLocationRepository};
use std::collections::HashSet;
use std::sync::Arc;

/// Built-in fieldtype registration table, in hydrate application order.
const BUILT_IN_FIELDTYPES: &[&str] = &[
    MATRIX,
    GRID,
    FILE,
    DATE,
    MULTI_SELECT,
    CHECKBOXES,
    FIELDPACK_CHECKBOXES,
    FIELDPACK_MULTISELECT,
    FIELDPACK_LIST,
    WYSIWYG,
];

/// Factory for building the hydrators one collection needs.
pub struct HydratorFactory {
    sites: Arc<dyn SiteRepository>,
    uploads: Arc<dyn UploadLocationRepository>,
}

impl HydratorFactory {
    pub fn new(
        sites: Arc<dyn SiteRepository>,
        uploads: Arc<dyn UploadLocationRepository>,
    ) -> Self {
        Self { sites, uploads }
    }

    /// Build exactly one hydrator per distinct fieldtype in the collection:
    /// registered fieldtypes get their variant, everything else gets a
    /// default pass-through hydrator.
    pub fn hydrators_for(&self, collection: &EntryCollection) -> Vec<Box<dyn Hydrator>> {
        let mut hydrators: Vec<Box<dyn Hydrator>> = Vec::new();
        let mut covered: HashSet<&str> = HashSet::new();

        for &tag in BUILT_IN_FIELDTYPES {
            if collection.has_fieldtype(tag) {
                hydrators.push(self.new_hydrator(collection, tag));
                covered.insert(tag);
            }
        }

        for tag in collection.fieldtypes() {
            if !covered.contains(tag.as_str()) {
                hydrators.push(Box::new(DefaultHydrator::new(collection, tag)));
            }
        }

        hydrators
    }

    fn new_hydrator(&self, collection: &EntryCollection, tag: &str) -> Box<dyn Hydrator> {
        match tag {
            MATRIX => Box::new(MatrixHydrator::new(collection)),
            GRID => Box::new(GridHydrator::new(collection)),
            FILE => Box::new(FileHydrator::new(
                collection,
                tag,
                Arc::clone(&self.uploads),
            )),
            DATE => Box::new(DateHydrator::new(collection, tag)),
            MULTI_SELECT | CHECKBOXES => Box::new(PipeHydrator::new(collection, tag)),
            FIELDPACK_CHECKBOXES | FIELDPACK_MULTISELECT | FIELDPACK_LIST => {
                Box::new(ExplodeHydrator::new(collection, tag))
            }
            WYSIWYG => Box::new(WysiwygHydrator::new(
                collection,
                tag,
                Arc::clone(&self.sites),
                Arc::clone(&self.uploads),
            )),
            other => Box::new(DefaultHydrator::new(collection, other)),
        }
    }
}
