//! Per-request resolution state.
//!
//! The resolver never writes through globals: every parameter it extracts
//! lands in the returned context, and the caller merges the bag into its
//! own request store.

use serde::Serialize;

// ============================================================================
// Params
// ============================================================================

/// Insertion-ordered parameter bag (name -> raw string value).
///
/// Primary-cascade values are raw path segments; only the post-URL pass
/// stores URL-decoded values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing an existing value in place.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Flag check: some parameters (like `feed`) signal by mere presence.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// RequestMode
// ============================================================================

/// Execution context of the incoming request.
///
/// Anything other than `Standard` bypasses path-based resolution; in those
/// modes the action comes straight from the explicit `action` query
/// parameter (see `Router::resolve_dirty`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestMode {
    /// Ordinary front-end page view.
    #[default]
    Standard,
    /// Administrative interface.
    Admin,
    /// Script-triggered (JavaScript include) request.
    Script,
    /// Asynchronous partial request.
    Ajax,
    /// Remote procedure call endpoint.
    Rpc,
}

impl RequestMode {
    /// Whether this mode skips the resolution cascade entirely.
    #[inline]
    pub fn bypasses_cascade(self) -> bool {
        !matches!(self, Self::Standard)
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Final outcome of a resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A handler was decided.
    Action(String),
    /// The request must be redirected (legacy search URL normalization).
    Redirect(String),
    /// No branch decided; the caller applies its own default.
    Undecided,
}

// ============================================================================
// ResolutionContext
// ============================================================================

/// Mutable state shared by the cascade branches for one request.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    /// Request path remainder (base URL path prefix stripped, query kept).
    pub request: String,
    /// `/`-delimited non-empty segments of the remainder.
    pub segments: Vec<String>,
    /// Resolved action. Set at most once; every branch that sets it stops
    /// the cascade.
    pub action: Option<String>,
    /// Redirect target, set only by the legacy search normalization.
    pub redirect: Option<String>,
    /// Extracted parameters (raw path segments).
    pub params: Params,
    /// Post-URL placeholder name -> URL-decoded value, filled only when
    /// the request matches the post-detail template.
    pub post_url_attrs: Params,
}

impl ResolutionContext {
    pub(crate) fn new(request: String) -> Self {
        let segments = request
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Self {
            request,
            segments,
            ..Self::default()
        }
    }

    /// Segment at `index`, if present.
    #[inline]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// Decide the action. Branches must return immediately afterwards; a
    /// prior decision is never overwritten.
    pub(crate) fn set_action(&mut self, name: &str) {
        debug_assert!(self.action.is_none(), "action decided twice: {name}");
        if self.action.is_none() {
            self.action = Some(name.to_string());
        }
    }

    /// Final outcome: redirect beats action beats undecided.
    pub fn resolution(&self) -> Resolution {
        if let Some(target) = &self.redirect {
            return Resolution::Redirect(target.clone());
        }
        match &self.action {
            Some(action) => Resolution::Action(action.clone()),
            None => Resolution::Undecided,
        }
    }
}
