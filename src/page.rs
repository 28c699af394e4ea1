//! Static page lookup collaborator.
//!
//! The resolver's final fallback asks whether the trailing path segment
//! names an existing static page. The lookup itself is external concern;
//! the cascade only needs [`PageLookup`]. [`PageStore`] is the in-memory
//! implementation used by applications and tests.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// A static page, addressed by its URL slug.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// URL slug, the last path segment (e.g., "about").
    pub slug: String,
    /// Page title.
    pub title: String,
}

impl Page {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
        }
    }
}

/// Content lookup used by the resolver's page-slug fallback.
pub trait PageLookup {
    /// Find a page whose slug equals `slug`.
    fn find_by_slug(&self, slug: &str) -> Option<Page>;
}

/// Thread-safe in-memory page storage keyed by slug.
#[derive(Debug, Default)]
pub struct PageStore {
    pages: RwLock<FxHashMap<String, Page>>,
}

impl PageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a page.
    pub fn insert(&self, page: Page) {
        self.pages.write().insert(page.slug.clone(), page);
    }

    /// Remove a page by slug.
    pub fn remove(&self, slug: &str) {
        self.pages.write().remove(slug);
    }

    pub fn len(&self) -> usize {
        self.pages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.read().is_empty()
    }
}

impl PageLookup for PageStore {
    fn find_by_slug(&self, slug: &str) -> Option<Page> {
        self.pages.read().get(slug).cloned()
    }
}
