//! Outbound link builder.
//!
//! `Router::url` turns a logical clean path into the physical URL to emit
//! in generated markup. With clean URLs enabled that is mostly a prefix
//! concatenation; with them disabled the rewrite table converts the clean
//! path into its query-string equivalent.

use super::resolver::Router;
use super::rewrite::{RewriteRule, RewriteTable};

/// Catch-all fallback: any single trailing span becomes a generic action.
const CATCH_ALL: (&str, &str) = ("/(.*?)/$", "/?action=$1");

impl Router<'_> {
    /// Build the outgoing URL for a logical clean path such as `id/42/` or
    /// `tag/golang/`.
    ///
    /// Clean mode prefixes the canonical site URL, dropping the `page/`
    /// viewing prefix and following the post-URL template's trailing-slash
    /// convention (`search/` keeps its slash either way; the bare search
    /// rewrite depends on it). Dirty mode runs the clean path through the
    /// rewrite table, filtered by the `parse_urls` hook and extended with
    /// synthesized feed variants and the catch-all.
    pub fn url(&self, clean: &str) -> String {
        if self.config.clean_urls {
            let path = clean.strip_prefix("page/").unwrap_or(clean);
            return if self.config.post_url.ends_with('/') || path == "search/" {
                format!("{}/{}", self.config.url, path)
            } else {
                format!("{}/{}", self.config.url, path.trim_end_matches('/'))
            };
        }

        let table = self.rewrite_table();
        let input = format!("/{}", clean.trim_start_matches('/'));
        let rewritten = table.apply(&input).unwrap_or(input);
        format!("{}{}", self.config.url, rewritten)
    }

    /// The rewrite table for one dirty-mode pass: defaults, filtered by
    /// the `parse_urls` hook, plus synthesized feed variants for every
    /// hook-added rule and the trailing catch-all.
    ///
    /// Each feed variant is inserted directly before its base rule: the
    /// base patterns are unanchored, so the variant has to get the first
    /// look at `...feed/` paths, and a variant placed after the generic
    /// `/([^/]+)/feed/` default would never be reached at all.
    fn rewrite_table(&self) -> RewriteTable {
        let defaults = RewriteTable::defaults();
        let mut table = defaults.clone();
        self.trigger.filter_urls(&mut table);

        let variants: Vec<(usize, RewriteRule)> = table
            .iter()
            .enumerate()
            .filter(|(_, rule)| !defaults.contains(rule) && !rule.template.contains("feed"))
            .map(|(index, rule)| {
                let variant = RewriteRule::new(
                    format!("{}feed/", rule.pattern),
                    format!("{}&feed", rule.template),
                );
                (index, variant)
            })
            .collect();
        for (index, variant) in variants.into_iter().rev() {
            table.insert(index, variant);
        }

        table.push(RewriteRule::new(CATCH_ALL.0, CATCH_ALL.1));
        table
    }
}
