//! # Site Page Repository
//!
//! Resolves `{page_N}` references in WYSIWYG content to page URIs. A miss
//! leaves the token unresolved in the output, never an error.

use std::collections::HashMap;

/// Lookup seam for site page URIs.
pub trait SiteRepository: Send + Sync {
    /// Page URI for the given entry ID, if that entry is a page
    fn page_uri(&self, entry_id: i64) -> Option<String>;
}

/// In-memory site page repository for tests and simple embeddings.
#[derive(Debug, Default)]
pub struct InMemorySiteRepository {
    pages: HashMap<i64, String>,
}

impl InMemorySiteRepository {
    pub fn new(pages: impl IntoIterator<Item = (i64, String)>) -> Self {
        Self {
            pages: pages.into_iter().collect(),
        }
    }
}

impl SiteRepository for InMemorySiteRepository {
    fn page_uri(&self, entry_id: i64) -> Option<String> {
        self.pages.get(&entry_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_uri() {
        let repo = InMemorySiteRepository::new([(5, "/about".to_string())]);
        assert_eq!(repo.page_uri(5).as_deref(), Some("/about"));
        assert!(repo.page_uri(6).is_none());
    }
}
