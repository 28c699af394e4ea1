//! Action resolver primary cascade.
//!
//! An ordered list of match/handler pairs evaluated in sequence over the
//! request remainder; the first branch to decide an action wins and the
//! cascade stops. Pagination and feed branches may bind parameters without
//! deciding, in which case evaluation continues. If nothing decides, the
//! secondary post-URL pass (`post_url.rs`) gets its turn.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::SiteConfig;
use crate::debug;
use crate::page::PageLookup;
use crate::trigger::Trigger;

use super::code::CodeTable;
use super::context::{Params, RequestMode, ResolutionContext};

/// `page/2` or `tag_page/3` style pagination segments, prefixed variable
/// name in group 1, page number in group 4.
static PAGINATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/((([^_/]+)_)?page)/([0-9]+)").unwrap());

static FEED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/feed/?$").unwrap());

static FEED_TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/feed/([^/]+)/?$").unwrap());

/// `(name)` parameter groups in custom route templates.
static ROUTE_PARAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

/// Legacy query fragment still emitted by old search forms.
const LEGACY_SEARCH: &str = "?action=search&query=";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// URL router: resolves inbound request paths to actions and rewrites
/// outbound clean URLs (see `link.rs` and `post_url.rs` for the other
/// impl blocks).
///
/// One router is constructed per process or request scope and passed
/// explicitly; collaborators are plain constructor dependencies.
pub struct Router<'a> {
    pub(super) config: &'a SiteConfig,
    pub(super) trigger: &'a Trigger,
    pages: &'a dyn PageLookup,
    /// Pluralized names of the installed feather (content) types.
    feathers: &'a [String],
}

impl<'a> Router<'a> {
    pub fn new(
        config: &'a SiteConfig,
        trigger: &'a Trigger,
        pages: &'a dyn PageLookup,
        feathers: &'a [String],
    ) -> Self {
        Self {
            config,
            trigger,
            pages,
            feathers,
        }
    }

    /// Build the per-request context: strip the base URL's path prefix
    /// (first occurrence only) and split into segments. The query string
    /// is kept; the legacy search normalization needs to see it.
    pub fn context_for(&self, request_uri: &str) -> ResolutionContext {
        let base_path = self.config.base_path();
        let request = if base_path.is_empty() {
            request_uri.to_string()
        } else {
            request_uri.replacen(&base_path, "", 1)
        };
        ResolutionContext::new(request)
    }

    /// Resolve a raw request path to an action and parameter bag.
    ///
    /// Does nothing beyond context setup when the request mode bypasses
    /// the cascade or clean URLs are disabled; those cases resolve from
    /// the explicit `action` query parameter via [`Self::resolve_dirty`].
    pub fn resolve(&self, request_uri: &str, mode: RequestMode) -> ResolutionContext {
        let mut ctx = self.context_for(request_uri);

        if mode.bypasses_cascade() || !self.config.clean_urls {
            return ctx;
        }

        // Just at /? Don't bother with all this.
        if ctx.segments.is_empty() {
            ctx.set_action("index");
            return ctx;
        }

        let steps: [(&str, fn(&Self, &mut ResolutionContext) -> Flow); 11] = [
            ("id", Self::step_id),
            ("pagination", Self::step_pagination),
            ("feed", Self::step_feed),
            ("feed_title", Self::step_feed_title),
            ("archive", Self::step_archive),
            ("search", Self::step_search),
            ("theme_preview", Self::step_theme_preview),
            ("bookmarklet", Self::step_bookmarklet),
            ("feather", Self::step_feather),
            ("custom_routes", Self::step_custom_routes),
            ("page_fallback", Self::step_page_fallback),
        ];

        for (name, step) in steps {
            if step(self, &mut ctx) == Flow::Stop {
                debug!("route"; "cascade decided at {}: {:?}", name, ctx.action);
                break;
            }
        }

        ctx
    }

    /// Dirty-URL action normalization.
    ///
    /// Defaults a missing action to `index`; a viewing action that names
    /// one of the pluralized feather types becomes the generic `feather`
    /// action with the type in the parameter bag.
    pub fn resolve_dirty(&self, action_param: Option<&str>) -> (String, Params) {
        let mut params = Params::new();
        let action = action_param.filter(|a| !a.is_empty()).unwrap_or("index");

        if !self.config.clean_urls && self.feathers.iter().any(|f| f == action) {
            params.set("feather", action);
            return ("feather".to_string(), params);
        }

        (action.to_string(), params)
    }

    /// Placeholder table after `url_code` filtering, for the post-URL pass.
    pub(super) fn filtered_code(&self) -> CodeTable {
        let mut code = CodeTable::defaults();
        self.trigger.filter_code(&mut code);
        code
    }

    // ========================================================================
    // cascade steps
    // ========================================================================

    /// Viewing a post by its ID.
    fn step_id(&self, ctx: &mut ResolutionContext) -> Flow {
        if ctx.arg(0) != Some("id") {
            return Flow::Continue;
        }
        if let Some(id) = ctx.arg(1).map(ToOwned::to_owned) {
            ctx.params.set("id", id);
        }
        ctx.set_action("id");
        Flow::Stop
    }

    /// Paginator: bind every `<name_>page/<n>` pair; pagination at the
    /// first segment means the index action, anywhere else it decides
    /// nothing on its own.
    fn step_pagination(&self, ctx: &mut ResolutionContext) -> Flow {
        let mut first_index = None;
        let mut bound: Vec<(String, String)> = Vec::new();

        for caps in PAGINATION.captures_iter(&ctx.request) {
            let page_var = caps[1].to_string();
            // The page variable is located by its first occurrence in the
            // segment list; an incidental earlier collision misbinds, as
            // the original always has.
            if let Some(index) = ctx.segments.iter().position(|s| *s == page_var) {
                if first_index.is_none() {
                    first_index = Some(index);
                }
                if let Some(value) = ctx.segments.get(index + 1) {
                    bound.push((page_var, value.clone()));
                }
            }
        }

        for (name, value) in bound {
            ctx.params.set(&name, value);
        }

        if first_index == Some(0) {
            ctx.set_action("index");
            return Flow::Stop;
        }
        Flow::Continue
    }

    /// Feed without a title: flag the request, and a bare `/feed/` is
    /// still the index.
    fn step_feed(&self, ctx: &mut ResolutionContext) -> Flow {
        if FEED.is_match(&ctx.request) {
            ctx.params.set("feed", "true");
            if ctx.arg(0) == Some("feed") {
                ctx.set_action("index");
                return Flow::Stop;
            }
        }
        Flow::Continue
    }

    /// Feed with a title parameter (not decoded here).
    fn step_feed_title(&self, ctx: &mut ResolutionContext) -> Flow {
        let title = FEED_TITLE
            .captures(&ctx.request)
            .map(|caps| caps[1].to_string());
        if let Some(title) = title {
            ctx.params.set("feed", "true");
            ctx.params.set("title", title);
            if ctx.arg(0) == Some("feed") {
                ctx.set_action("index");
                return Flow::Stop;
            }
        }
        Flow::Continue
    }

    /// Archive: year/month/day are positional and must be numeric; there
    /// might be a /page/ in there, so non-numeric segments are skipped.
    fn step_archive(&self, ctx: &mut ResolutionContext) -> Flow {
        if ctx.arg(0) != Some("archive") {
            return Flow::Continue;
        }
        for (index, name) in [(1, "year"), (2, "month"), (3, "day")] {
            let value = ctx
                .arg(index)
                .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
                .map(ToOwned::to_owned);
            if let Some(value) = value {
                ctx.params.set(name, value);
            }
        }
        ctx.set_action("archive");
        Flow::Stop
    }

    /// Searching; requests still carrying the legacy query fragment are
    /// redirected to the stripped form instead of being resolved.
    fn step_search(&self, ctx: &mut ResolutionContext) -> Flow {
        if ctx.arg(0) != Some("search") {
            return Flow::Continue;
        }
        if ctx.arg(1).is_some() && ctx.request.contains(LEGACY_SEARCH) {
            ctx.redirect = Some(ctx.request.replace(LEGACY_SEARCH, ""));
            return Flow::Stop;
        }
        if let Some(query) = ctx.arg(1).map(ToOwned::to_owned) {
            ctx.params.set("query", query);
        }
        ctx.set_action("search");
        Flow::Stop
    }

    /// Theme previewing.
    fn step_theme_preview(&self, ctx: &mut ResolutionContext) -> Flow {
        if ctx.arg(0) == Some("theme_preview")
            && let Some(theme) = ctx.arg(1).filter(|s| !s.is_empty()).map(ToOwned::to_owned)
        {
            ctx.params.set("theme", theme);
            ctx.set_action("theme_preview");
            return Flow::Stop;
        }
        Flow::Continue
    }

    /// Bookmarklet; a missing status segment is tolerated, the parameter
    /// is simply absent.
    fn step_bookmarklet(&self, ctx: &mut ResolutionContext) -> Flow {
        if ctx.arg(0) != Some("bookmarklet") {
            return Flow::Continue;
        }
        if let Some(status) = ctx.arg(1).map(ToOwned::to_owned) {
            ctx.params.set("status", status);
        }
        ctx.set_action("bookmarklet");
        Flow::Stop
    }

    /// Viewing a feather (content type) listing.
    fn step_feather(&self, ctx: &mut ResolutionContext) -> Flow {
        let Some(first) = ctx.arg(0).map(ToOwned::to_owned) else {
            return Flow::Continue;
        };
        let listing_tail = matches!(ctx.arg(1), None | Some("feed") | Some("page"));
        if self.feathers.iter().any(|f| *f == first) && listing_tail {
            ctx.params.set("feather", first);
            ctx.set_action("feather");
            return Flow::Stop;
        }
        Flow::Continue
    }

    /// Custom routes added by modules, feathers, themes, etc. First
    /// matching route wins; registration order is significant.
    fn step_custom_routes(&self, ctx: &mut ResolutionContext) -> Flow {
        for route in &self.config.routes {
            let names: Vec<String> = ROUTE_PARAM
                .captures_iter(route)
                .map(|caps| caps[1].to_string())
                .collect();
            // Parameterless templates resolve as plain actions elsewhere.
            if names.is_empty() {
                continue;
            }

            let mut template = route.as_str();
            // Keep the custom route's trailing-slash convention in step
            // with the post URL setting.
            if !self.config.post_url.ends_with('/') {
                template = template.trim_end_matches('/');
            }

            let Ok(re) = Regex::new(&route_pattern(template)) else {
                continue;
            };
            let captured = re.captures(&ctx.request).map(|caps| {
                (0..names.len())
                    .map(|i| caps.get(i + 1).map(|m| m.as_str().to_string()))
                    .collect::<Vec<_>>()
            });

            if let Some(values) = captured {
                for (name, value) in names.iter().zip(values) {
                    if let Some(value) = value {
                        ctx.params.set(name, value);
                    }
                }
                let action = ctx.segments[0].clone();
                ctx.set_action(&action);
                return Flow::Stop;
            }
        }
        Flow::Continue
    }

    /// Last resort: does the trailing segment name an existing static
    /// page? If not, the cascade yields no decision.
    fn step_page_fallback(&self, ctx: &mut ResolutionContext) -> Flow {
        let Some(slug) = ctx.segments.last().cloned() else {
            return Flow::Continue;
        };
        if self.pages.find_by_slug(&slug).is_some() {
            ctx.params.set("url", slug);
            ctx.set_action("page");
            return Flow::Stop;
        }
        Flow::Continue
    }
}

/// Compile a custom route template into a matching regex: literals are
/// escaped, each `(name)` group becomes a segment capture.
fn route_pattern(template: &str) -> String {
    let mut pattern = String::new();
    let mut last = 0;
    for group in ROUTE_PARAM.find_iter(template) {
        pattern.push_str(&regex::escape(&template[last..group.start()]));
        pattern.push_str("([^/]+)");
        last = group.end();
    }
    pattern.push_str(&regex::escape(&template[last..]));
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Page, PageStore};
    use crate::route::Resolution;

    struct Fixture {
        config: SiteConfig,
        trigger: Trigger,
        pages: PageStore,
        feathers: Vec<String>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                config: SiteConfig {
                    url: "https://example.com".into(),
                    clean_urls: true,
                    ..SiteConfig::default()
                },
                trigger: Trigger::new(),
                pages: PageStore::new(),
                feathers: vec!["photos".into(), "quotes".into(), "links".into()],
            }
        }

        fn router(&self) -> Router<'_> {
            Router::new(&self.config, &self.trigger, &self.pages, &self.feathers)
        }

        fn resolve(&self, uri: &str) -> ResolutionContext {
            self.router().resolve(uri, RequestMode::Standard)
        }
    }

    #[test]
    fn test_root_is_index() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/");
        assert_eq!(ctx.action.as_deref(), Some("index"));
        assert!(ctx.params.is_empty());
    }

    #[test]
    fn test_id() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/id/42/");
        assert_eq!(ctx.action.as_deref(), Some("id"));
        assert_eq!(ctx.params.get("id"), Some("42"));
    }

    #[test]
    fn test_id_without_value_is_lenient() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/id/");
        assert_eq!(ctx.action.as_deref(), Some("id"));
        assert_eq!(ctx.params.get("id"), None);
    }

    #[test]
    fn test_base_path_prefix_stripped() {
        let mut fx = Fixture::new();
        fx.config.url = "https://example.com/blog".into();
        let ctx = fx.resolve("/blog/id/42/");
        assert_eq!(ctx.action.as_deref(), Some("id"));
        assert_eq!(ctx.params.get("id"), Some("42"));
    }

    #[test]
    fn test_pagination_at_root_is_index() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/page/2/");
        assert_eq!(ctx.action.as_deref(), Some("index"));
        assert_eq!(ctx.params.get("page"), Some("2"));
    }

    #[test]
    fn test_prefixed_pagination_continues_cascade() {
        let mut fx = Fixture::new();
        fx.config.routes.push("/tag/(name)/".into());
        let ctx = fx.resolve("/tag/golang/tag_page/3/");
        assert_eq!(ctx.params.get("tag_page"), Some("3"));
        assert_eq!(ctx.action.as_deref(), Some("tag"));
        assert_eq!(ctx.params.get("name"), Some("golang"));
    }

    #[test]
    fn test_bare_feed_is_index() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/feed/");
        assert_eq!(ctx.action.as_deref(), Some("index"));
        assert_eq!(ctx.params.get("feed"), Some("true"));
    }

    #[test]
    fn test_feed_with_title() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/feed/Recent%20Posts/");
        assert_eq!(ctx.action.as_deref(), Some("index"));
        assert_eq!(ctx.params.get("feed"), Some("true"));
        // Title values are not decoded by the primary cascade.
        assert_eq!(ctx.params.get("title"), Some("Recent%20Posts"));
    }

    #[test]
    fn test_feed_suffix_flags_without_deciding() {
        let mut fx = Fixture::new();
        fx.config.routes.push("/tag/(name)/".into());
        let ctx = fx.resolve("/tag/golang/feed/");
        assert_eq!(ctx.params.get("feed"), Some("true"));
        assert_eq!(ctx.action.as_deref(), Some("tag"));
        assert_eq!(ctx.params.get("name"), Some("golang"));
    }

    #[test]
    fn test_archive_year_month() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/archive/2014/03/");
        assert_eq!(ctx.action.as_deref(), Some("archive"));
        assert_eq!(ctx.params.get("year"), Some("2014"));
        assert_eq!(ctx.params.get("month"), Some("03"));
        assert_eq!(ctx.params.get("day"), None);
    }

    #[test]
    fn test_archive_with_pagination_skips_non_numeric() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/archive/2014/page/2/");
        assert_eq!(ctx.action.as_deref(), Some("archive"));
        assert_eq!(ctx.params.get("year"), Some("2014"));
        // "page" is not numeric, so month stays unset; the positional
        // check then picks up the numeric page number as the day.
        assert_eq!(ctx.params.get("month"), None);
        assert_eq!(ctx.params.get("day"), Some("2"));
        assert_eq!(ctx.params.get("page"), Some("2"));
    }

    #[test]
    fn test_search_without_query() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/search/");
        assert_eq!(ctx.action.as_deref(), Some("search"));
        assert_eq!(ctx.params.get("query"), None);
    }

    #[test]
    fn test_search_with_query() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/search/rust/");
        assert_eq!(ctx.action.as_deref(), Some("search"));
        assert_eq!(ctx.params.get("query"), Some("rust"));
    }

    #[test]
    fn test_legacy_search_redirects() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/search/rust/?action=search&query=rust");
        assert_eq!(
            ctx.resolution(),
            Resolution::Redirect("/search/rust/rust".into())
        );
        assert_eq!(ctx.action, None);
    }

    #[test]
    fn test_theme_preview() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/theme_preview/midnight/");
        assert_eq!(ctx.action.as_deref(), Some("theme_preview"));
        assert_eq!(ctx.params.get("theme"), Some("midnight"));
    }

    #[test]
    fn test_theme_preview_without_theme_falls_through() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/theme_preview/");
        // No theme segment: not a preview, and with nothing else matching
        // the cascade leaves the action undecided.
        assert_eq!(ctx.resolution(), Resolution::Undecided);
    }

    #[test]
    fn test_bookmarklet() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/bookmarklet/success/");
        assert_eq!(ctx.action.as_deref(), Some("bookmarklet"));
        assert_eq!(ctx.params.get("status"), Some("success"));
    }

    #[test]
    fn test_bookmarklet_missing_status_tolerated() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/bookmarklet/");
        assert_eq!(ctx.action.as_deref(), Some("bookmarklet"));
        assert_eq!(ctx.params.get("status"), None);
    }

    #[test]
    fn test_feather_listing() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/photos/");
        assert_eq!(ctx.action.as_deref(), Some("feather"));
        assert_eq!(ctx.params.get("feather"), Some("photos"));
    }

    #[test]
    fn test_feather_listing_with_feed_tail() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/photos/feed/");
        assert_eq!(ctx.action.as_deref(), Some("feather"));
        assert_eq!(ctx.params.get("feather"), Some("photos"));
        assert_eq!(ctx.params.get("feed"), Some("true"));
    }

    #[test]
    fn test_feather_with_other_tail_falls_through() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/photos/sunset/");
        assert_ne!(ctx.action.as_deref(), Some("feather"));
    }

    #[test]
    fn test_custom_route_binds_parameters() {
        let mut fx = Fixture::new();
        fx.config.routes.push("/tag/(name)/".into());
        let ctx = fx.resolve("/tag/golang/");
        assert_eq!(ctx.action.as_deref(), Some("tag"));
        assert_eq!(ctx.params.get("name"), Some("golang"));
    }

    #[test]
    fn test_custom_route_first_match_wins() {
        let mut fx = Fixture::new();
        fx.config.routes.push("/tag/(first)/".into());
        fx.config.routes.push("/tag/(second)/".into());
        let ctx = fx.resolve("/tag/golang/");
        assert_eq!(ctx.params.get("first"), Some("golang"));
        assert_eq!(ctx.params.get("second"), None);
    }

    #[test]
    fn test_custom_route_multiple_parameters() {
        let mut fx = Fixture::new();
        fx.config.routes.push("/author/(name)/tag/(tag)/".into());
        let ctx = fx.resolve("/author/kaj/tag/rust/");
        assert_eq!(ctx.action.as_deref(), Some("author"));
        assert_eq!(ctx.params.get("name"), Some("kaj"));
        assert_eq!(ctx.params.get("tag"), Some("rust"));
    }

    #[test]
    fn test_custom_route_trailing_slash_follows_post_url() {
        let mut fx = Fixture::new();
        fx.config.post_url = "(year)/(url)".into();
        fx.config.routes.push("/tag/(name)/".into());
        // Post URL has no trailing slash, so the route matches without
        // one as well.
        let ctx = fx.resolve("/tag/golang");
        assert_eq!(ctx.action.as_deref(), Some("tag"));
        assert_eq!(ctx.params.get("name"), Some("golang"));
    }

    #[test]
    fn test_malformed_route_falls_through() {
        let mut fx = Fixture::new();
        fx.config.routes.push("/tag/(name/".into());
        fx.config.routes.push("/tag/(name)/".into());
        let ctx = fx.resolve("/tag/golang/");
        // The unbalanced template has no complete parameter group, so it
        // is skipped and the next candidate wins.
        assert_eq!(ctx.action.as_deref(), Some("tag"));
        assert_eq!(ctx.params.get("name"), Some("golang"));
    }

    #[test]
    fn test_page_fallback() {
        let fx = Fixture::new();
        fx.pages.insert(Page::new("about", "About Us"));
        let ctx = fx.resolve("/about/");
        assert_eq!(ctx.action.as_deref(), Some("page"));
        assert_eq!(ctx.params.get("url"), Some("about"));
    }

    #[test]
    fn test_nested_page_fallback_uses_last_segment() {
        let fx = Fixture::new();
        fx.pages.insert(Page::new("team", "Team"));
        let ctx = fx.resolve("/about/team/");
        assert_eq!(ctx.action.as_deref(), Some("page"));
        assert_eq!(ctx.params.get("url"), Some("team"));
    }

    #[test]
    fn test_unknown_path_is_undecided() {
        let fx = Fixture::new();
        let ctx = fx.resolve("/no-such-thing/");
        assert_eq!(ctx.resolution(), Resolution::Undecided);
    }

    #[test]
    fn test_admin_mode_bypasses_cascade() {
        let fx = Fixture::new();
        let ctx = fx.router().resolve("/id/42/", RequestMode::Admin);
        assert_eq!(ctx.action, None);
        assert!(ctx.params.is_empty());
    }

    #[test]
    fn test_dirty_urls_bypass_cascade() {
        let mut fx = Fixture::new();
        fx.config.clean_urls = false;
        let ctx = fx.resolve("/id/42/");
        assert_eq!(ctx.action, None);
    }

    #[test]
    fn test_resolve_dirty_defaults_to_index() {
        let mut fx = Fixture::new();
        fx.config.clean_urls = false;
        let (action, params) = fx.router().resolve_dirty(None);
        assert_eq!(action, "index");
        assert!(params.is_empty());
    }

    #[test]
    fn test_resolve_dirty_feather_normalization() {
        let mut fx = Fixture::new();
        fx.config.clean_urls = false;
        let (action, params) = fx.router().resolve_dirty(Some("photos"));
        assert_eq!(action, "feather");
        assert_eq!(params.get("feather"), Some("photos"));

        let (action, params) = fx.router().resolve_dirty(Some("archive"));
        assert_eq!(action, "archive");
        assert!(params.is_empty());
    }

    #[test]
    fn test_idempotence() {
        let mut fx = Fixture::new();
        fx.config.routes.push("/tag/(name)/".into());
        fx.pages.insert(Page::new("about", "About"));

        for uri in ["/tag/golang/feed/", "/archive/2014/03/", "/about/"] {
            let first = fx.resolve(uri);
            let second = fx.resolve(uri);
            assert_eq!(first.action, second.action, "action differs for {uri}");
            assert_eq!(first.params, second.params, "params differ for {uri}");
        }
    }

    #[test]
    fn test_route_pattern_compiler() {
        assert_eq!(route_pattern("/tag/(name)/"), "/tag/([^/]+)/");
        assert_eq!(
            route_pattern("/author/(name)/tag/(tag)"),
            "/author/([^/]+)/tag/([^/]+)"
        );
        // No parameters: everything is escaped literal text.
        assert_eq!(route_pattern("/tags/"), "/tags/");
    }
}
