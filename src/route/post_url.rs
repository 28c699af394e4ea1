//! Secondary resolution pass: post permalinks.
//!
//! Runs only when the primary cascade left the action undecided. The
//! post-URL template from the configuration is expanded into a regex via
//! the placeholder table; a match means the request views a single post,
//! and the placeholder values land URL-decoded in `post_url_attrs`.

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::debug;

use super::context::{RequestMode, ResolutionContext};
use super::resolver::Router;

/// Dispatch surface of the application's front controller.
///
/// A one-segment request naming a controller method resolves to that
/// method directly, before the permalink template is consulted. This is
/// how parameterless custom pages (`/tags/`) find their handler.
pub trait FrontController {
    fn has_method(&self, name: &str) -> bool;
}

impl FrontController for rustc_hash::FxHashSet<String> {
    fn has_method(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl Router<'_> {
    /// Decide the action for requests the primary cascade passed on.
    ///
    /// Always decides when it runs: either a controller method, the
    /// `view` action with decoded permalink attributes, or the first
    /// path segment (`index` for the bare root) as a last resort.
    pub fn check_post_url(
        &self,
        ctx: &mut ResolutionContext,
        mode: RequestMode,
        front: &dyn FrontController,
    ) {
        if mode.bypasses_cascade() || !self.config.clean_urls || ctx.action.is_some() {
            return;
        }

        if ctx.segments.len() == 1 && front.has_method(&ctx.segments[0]) {
            let action = ctx.segments[0].clone();
            ctx.set_action(&action);
            return;
        }

        if self.matches_post_url(ctx) {
            self.bind_post_url_attrs(ctx);
            ctx.set_action("view");
            return;
        }

        let fallback = ctx
            .segments
            .first()
            .cloned()
            .unwrap_or_else(|| "index".to_string());
        ctx.set_action(&fallback);
    }

    /// Whether the request remainder matches the expanded permalink
    /// template. Trailing slashes are ignored on both sides.
    fn matches_post_url(&self, ctx: &ResolutionContext) -> bool {
        let code = self.filtered_code();
        let pattern = code.expand(self.config.post_url.trim_end_matches('/'));
        match Regex::new(&pattern) {
            Ok(re) => re.is_match(ctx.request.trim_end_matches('/')),
            // A bad url_code override leaves the template unmatchable.
            Err(err) => {
                debug!("route"; "post_url expands to malformed pattern {}: {}", pattern, err);
                false
            }
        }
    }

    /// Bind each `(name)` token of the template to the request segment at
    /// the same position, URL-decoded. Literal tokens are skipped but
    /// still consume their position.
    fn bind_post_url_attrs(&self, ctx: &mut ResolutionContext) {
        let tokens: Vec<&str> = self
            .config
            .post_url
            .split('/')
            .filter(|t| !t.is_empty())
            .collect();
        for (index, token) in tokens.iter().enumerate() {
            if !token.starts_with('(') {
                continue;
            }
            let name = token.trim_start_matches('(').trim_end_matches(')').to_string();
            if let Some(segment) = ctx.segments.get(index) {
                let value = decode_segment(segment);
                ctx.post_url_attrs.set(&name, value);
            }
        }
    }
}

/// Percent-decode one path segment, keeping it as-is when the decoded
/// bytes are not valid UTF-8.
fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
