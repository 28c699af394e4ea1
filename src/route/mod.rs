//! URL routing: rewrite table, link builder, action resolver.
//!
//! # Module Structure
//!
//! ```text
//! route/
//! ├── code       # placeholder symbol table ((year) -> ([0-9]{4}), ...)
//! ├── rewrite    # clean-to-dirty rewrite rule table
//! ├── link       # outbound transform (Router::url)
//! ├── context    # ResolutionContext, Params, Resolution
//! ├── resolver   # inbound primary cascade (Router::resolve)
//! └── post_url   # inbound secondary pass (Router::check_post_url)
//! ```
//!
//! Dependency order, leaves first: the rewrite table underlies the link
//! builder; the placeholder table underlies the post-URL matcher used by
//! the resolver's secondary pass.

mod code;
mod context;
mod link;
mod post_url;
mod resolver;
mod rewrite;

pub use code::CodeTable;
pub use context::{Params, RequestMode, Resolution, ResolutionContext};
pub use post_url::FrontController;
pub use resolver::Router;
pub use rewrite::{RewriteRule, RewriteTable};
