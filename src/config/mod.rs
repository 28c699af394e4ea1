//! Site configuration management for `plumage.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error      # ConfigError
//! ├── handle     # ConfigHandle (shared config + route persistence)
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! # Fields
//!
//! | Field        | Purpose                                            |
//! |--------------|----------------------------------------------------|
//! | `clean_urls` | Emit human-readable URLs instead of query strings  |
//! | `url`        | Canonical site URL, path used as request prefix    |
//! | `post_url`   | Post permalink template with `(name)` placeholders |
//! | `routes`     | Custom route templates, ordered, first match wins  |

mod error;
mod handle;

pub use error::ConfigError;
pub use handle::ConfigHandle;

use crate::log;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing plumage.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Whether to generate clean (path-style) URLs.
    ///
    /// When disabled, generated links fall back to `?action=...` query
    /// strings and the inbound resolution cascade does not run.
    pub clean_urls: bool,

    /// Canonical site URL (e.g., "https://example.com/blog").
    ///
    /// Its path component is stripped from incoming request URIs before
    /// resolution and prefixed onto every generated link.
    pub url: String,

    /// Post permalink template, placeholders wrapped in parentheses
    /// (e.g., "(year)/(month)/(day)/(url)/").
    ///
    /// The trailing-slash convention of this template decides whether
    /// generated links and custom routes keep their trailing slashes.
    pub post_url: String,

    /// Custom route templates registered by modules, feathers, themes, etc.
    /// Order is significant: the first matching route wins.
    pub routes: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            clean_urls: true,
            url: String::new(),
            post_url: "(year)/(month)/(day)/(url)/".into(),
            routes: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file path with unknown field detection.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let (config, _) = Self::parse_with_ignored(content)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("config"; "unknown fields in {}:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Persist the configuration back to its file.
    ///
    /// Route add/remove operations call this immediately after mutating.
    pub fn save(&self) -> Result<()> {
        if self.config_path.as_os_str().is_empty() {
            bail!(ConfigError::Validation(
                "cannot persist config without a config path".into()
            ));
        }
        let content = toml::to_string_pretty(self).map_err(ConfigError::TomlSer)?;
        fs::write(&self.config_path, content)
            .map_err(|err| ConfigError::Io(self.config_path.clone(), err))?;
        Ok(())
    }

    /// Validate configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    /// - `post_url` must not be empty
    pub fn validate(&self) -> Result<()> {
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    bail!(ConfigError::Validation(format!(
                        "url scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    )));
                }
                if parsed.host_str().is_none() {
                    bail!(ConfigError::Validation(
                        "url must have a valid host, e.g. https://example.com".into()
                    ));
                }
            }
            Err(e) => {
                bail!(ConfigError::Validation(format!("invalid url: {}", e)));
            }
        }

        if self.post_url.is_empty() {
            bail!(ConfigError::Validation("post_url must not be empty".into()));
        }

        Ok(())
    }

    /// Path component of the canonical site URL, used as the request prefix.
    ///
    /// Returns `""` when the site lives at the host root, so callers can
    /// strip the prefix unconditionally.
    pub fn base_path(&self) -> String {
        url::Url::parse(&self.url)
            .map(|u| u.path().to_string())
            .ok()
            .filter(|p| p != "/")
            .unwrap_or_default()
    }
}

// ============================================================================
// tests
// ============================================================================
