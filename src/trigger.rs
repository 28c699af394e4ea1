//! Extension hook registry.
//!
//! Modules, feathers and themes extend the routing tables without touching
//! the defaults: each hook receives a per-pass copy and may add, remove or
//! reorder entries. Nothing a filter does persists beyond the pass it runs
//! in.
//!
//! Hooks:
//! - `parse_urls` - filters the clean-to-dirty rewrite table used by link
//!   generation
//! - `url_code` - filters the placeholder symbol table used by post-URL
//!   matching

use crate::route::{CodeTable, RewriteTable};

type UrlsFilter = Box<dyn Fn(&mut RewriteTable) + Send + Sync>;
type CodeFilter = Box<dyn Fn(&mut CodeTable) + Send + Sync>;

/// Registry of extension filters, applied in registration order.
#[derive(Default)]
pub struct Trigger {
    parse_urls: Vec<UrlsFilter>,
    url_code: Vec<CodeFilter>,
}

impl Trigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filter over the rewrite table (`parse_urls` hook).
    pub fn on_parse_urls(&mut self, filter: impl Fn(&mut RewriteTable) + Send + Sync + 'static) {
        self.parse_urls.push(Box::new(filter));
    }

    /// Register a filter over the placeholder table (`url_code` hook).
    pub fn on_url_code(&mut self, filter: impl Fn(&mut CodeTable) + Send + Sync + 'static) {
        self.url_code.push(Box::new(filter));
    }

    /// Run all `parse_urls` filters over a copy of the rewrite table.
    pub fn filter_urls(&self, table: &mut RewriteTable) {
        for filter in &self.parse_urls {
            filter(table);
        }
    }

    /// Run all `url_code` filters over a copy of the placeholder table.
    pub fn filter_code(&self, code: &mut CodeTable) {
        for filter in &self.url_code {
            filter(code);
        }
    }
}

impl std::fmt::Debug for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trigger")
            .field("parse_urls", &self.parse_urls.len())
            .field("url_code", &self.url_code.len())
            .finish()
    }
}
