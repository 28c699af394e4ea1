//! Shared config handle with write-serialized route edits.
//!
//! Resolution passes only read the config, but route registration is a
//! read-modify-write against the persisted route list. Two administrative
//! edits racing would lose an update, so all mutations go through a single
//! write lock and persist before the lock is released.

use crate::config::SiteConfig;
use anyhow::Result;
use parking_lot::{RwLock, RwLockReadGuard};

/// Shared configuration storage.
///
/// Wrap in an `Arc` to share between the request path and administrative
/// code.
#[derive(Debug)]
pub struct ConfigHandle {
    inner: RwLock<SiteConfig>,
}

impl ConfigHandle {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            inner: RwLock::new(config),
        }
    }

    /// Read access for resolution passes.
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, SiteConfig> {
        self.inner.read()
    }

    /// Clone of the current configuration.
    pub fn snapshot(&self) -> SiteConfig {
        self.inner.read().clone()
    }

    /// Register a custom route and persist immediately.
    ///
    /// Only needed for actions that take more than one parameter: `/tags/`
    /// resolves on its own, but `/tag/(name)/` must be registered. Wrap
    /// variables in parentheses.
    pub fn add_route(&self, template: &str) -> Result<()> {
        let mut config = self.inner.write();
        config.routes.push(template.to_string());
        config.save()
    }

    /// Remove the first route exactly matching `template` and persist.
    pub fn remove_route(&self, template: &str) -> Result<()> {
        let mut config = self.inner.write();
        if let Some(index) = config.routes.iter().position(|r| r == template) {
            config.routes.remove(index);
        }
        config.save()
    }

    /// Mutate the configuration under the write lock and persist.
    pub fn update(&self, f: impl FnOnce(&mut SiteConfig)) -> Result<()> {
        let mut config = self.inner.write();
        f(&mut config);
        config.save()
    }
}
