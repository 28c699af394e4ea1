//! Clean-to-dirty URL rewrite rule table.
//!
//! Each rule pairs a regex over the clean path style with a substitution
//! template producing the equivalent query-string path. The default set is
//! fixed and ordered; extensions filter a per-pass copy through the
//! `parse_urls` trigger hook.

use regex::Regex;

use crate::debug;

/// One clean-pattern to dirty-template rewrite rule.
///
/// The template may back-reference capture groups with `$1`, `$2`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    /// Regex over the clean path (unanchored unless the pattern anchors).
    pub pattern: String,
    /// Substitution template for the matched span.
    pub template: String,
}

impl RewriteRule {
    pub fn new(pattern: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            template: template.into(),
        }
    }
}

/// Ordered rewrite rule table with first-match-wins application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteTable {
    rules: Vec<RewriteRule>,
}

impl RewriteTable {
    /// The default clean URL to dirty URL translations.
    pub fn defaults() -> Self {
        let rules = [
            ("/id/([0-9]+)/", "/?action=view&id=$1"),
            ("/page/(([^/]+)/)+", "/?action=page&url=$2"),
            ("/search/", "/?action=search"),
            ("/search/([^/]+)/", "/?action=search&query=$1"),
            ("/archive/([^/]+)/([^/]+)/", "/?action=archive&year=$1&month=$2"),
            ("/theme_preview/([^/]+)/", "/?action=theme_preview&theme=$1"),
            ("/([^/]+)/feed/([^/]+)/", "/?action=$1&feed&title=$2"),
            ("/([^/]+)/feed/", "/?action=$1&feed"),
        ];
        Self {
            rules: rules
                .iter()
                .map(|(p, t)| RewriteRule::new(*p, *t))
                .collect(),
        }
    }

    /// Append a rule.
    pub fn push(&mut self, rule: RewriteRule) {
        self.rules.push(rule);
    }

    /// Insert a rule at `index`, shifting later rules down.
    pub fn insert(&mut self, index: usize, rule: RewriteRule) {
        self.rules.insert(index, rule);
    }

    /// Remove every rule with the given clean pattern.
    pub fn remove(&mut self, pattern: &str) {
        self.rules.retain(|r| r.pattern != pattern);
    }

    pub fn contains(&self, rule: &RewriteRule) -> bool {
        self.rules.contains(rule)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RewriteRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply the table to `input`: try each rule's pattern in table order
    /// and substitute using the first one that matches, replacing only the
    /// first occurrence. Returns `None` when no rule matches.
    ///
    /// This is deliberately not a stacked replace; one rule decides.
    pub fn apply(&self, input: &str) -> Option<String> {
        for rule in &self.rules {
            let re = match Regex::new(&rule.pattern) {
                Ok(re) => re,
                // Malformed extension patterns are the extension's problem.
                Err(err) => {
                    debug!("route"; "skipping malformed rewrite pattern {}: {}", rule.pattern, err);
                    continue;
                }
            };
            if re.is_match(input) {
                return Some(re.replace(input, rule.template.as_str()).into_owned());
            }
        }
        None
    }
}
