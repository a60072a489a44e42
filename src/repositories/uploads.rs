//! # Upload Location Repository
//!
//! Resolves internal upload-location IDs (the `{filedir_N}` references in
//! file fields and WYSIWYG content) to their public URLs. Lookup misses are
//! policy, not errors: callers leave tokens unresolved or decode to null.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One configured upload location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadLocation {
    pub id: i64,
    pub name: String,
    /// Public base URL, e.g. `/uploads/images/`.
    pub url: String,
}

impl UploadLocation {
    pub fn new(id: i64, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Lookup seam for upload locations.
pub trait UploadLocationRepository: Send + Sync {
    fn find(&self, id: i64) -> Option<UploadLocation>;
}

/// In-memory upload location repository for tests and simple embeddings.
#[derive(Debug, Default)]
pub struct InMemoryUploadLocationRepository {
    by_id: HashMap<i64, UploadLocation>,
}

impl InMemoryUploadLocationRepository {
    pub fn new(locations: Vec<UploadLocation>) -> Self {
        Self {
            by_id: locations.into_iter().map(|loc| (loc.id, loc)).collect(),
        }
    }
}

impl UploadLocationRepository for InMemoryUploadLocationRepository {
    fn find(&self, id: i64) -> Option<UploadLocation> {
        self.by_id.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        let repo = InMemoryUploadLocationRepository::new(vec![UploadLocation::new(
            2,
            "Images",
            "/uploads/images/",
        )]);
        assert_eq!(repo.find(2).unwrap().url, "/uploads/images/");
        assert!(repo.find(3).is_none());
    }
}
