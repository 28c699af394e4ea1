//! Plumage - URL routing and rewriting for feather-based blogs.
//!
//! Two transforms over one shared rule set:
//!
//! - **Outbound** ([`Router::url`]): a logical ("clean") URL becomes the
//!   physical URL to emit in links, honoring the site-wide `clean_urls`
//!   toggle. With the toggle off, an ordered rewrite table converts the
//!   clean path to its query-string ("dirty") equivalent.
//! - **Inbound** ([`Router::resolve`]): a raw request path becomes a logical
//!   action name plus extracted parameters, via an ordered cascade of
//!   pattern tests ending in a custom-route pass and a page-slug fallback.
//!   [`Router::check_post_url`] runs afterwards for post-detail URLs built
//!   from the configured post-URL template.
//!
//! External code extends both directions through [`Trigger`] hooks: the
//! `parse_urls` hook filters the rewrite table, the `url_code` hook filters
//! the placeholder symbol table.

pub mod config;
pub mod logger;
pub mod page;
pub mod route;
pub mod trigger;

pub use config::{ConfigError, ConfigHandle, SiteConfig};
pub use page::{Page, PageLookup, PageStore};
pub use route::{
    CodeTable, FrontController, Params, RequestMode, Resolution, ResolutionContext, RewriteRule,
    RewriteTable, Router,
};
pub use trigger::Trigger;
