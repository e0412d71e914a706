//! Global configuration
//!
//! Holds the files cache shared by every name lookup and guards it with an
//! attach-once lifecycle: the cache can be swapped until `init`, never after.

use log::{debug, info};
use std::sync::Arc;

use super::files_cache::{DefaultFilesCache, FilesCache, NullFilesCache};
use crate::config::{CacheKind, VfsConfig};
use crate::error::{ConfigError, NameError};
use crate::name::{FileName, NameScope};

/// Global parameters of the naming layer.
#[derive(Debug)]
pub struct GlobalConfiguration {
    in_use: bool,
    files_cache: Arc<dyn FilesCache>,
    default_scope: NameScope,
}

impl Default for GlobalConfiguration {
    fn default() -> Self {
        Self {
            in_use: false,
            files_cache: Arc::new(DefaultFilesCache::new()),
            default_scope: NameScope::FileSystem,
        }
    }
}

impl GlobalConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an uninitialized configuration from loaded settings.
    pub fn from_config(config: &VfsConfig) -> Self {
        let files_cache: Arc<dyn FilesCache> = match (config.cache.kind, config.cache.max_entries) {
            (CacheKind::Default, Some(max)) => Arc::new(DefaultFilesCache::with_max_entries(max)),
            (CacheKind::Default, None) => Arc::new(DefaultFilesCache::new()),
            (CacheKind::Null, _) => Arc::new(NullFilesCache),
        };

        Self {
            in_use: false,
            files_cache,
            default_scope: config.default_scope,
        }
    }

    fn assert_not_in_use(&self) -> Result<(), ConfigError> {
        if self.in_use {
            return Err(ConfigError::InUse);
        }
        Ok(())
    }

    /// Replaces the files cache. Fails once the configuration is initialized.
    pub fn set_files_cache(&mut self, files_cache: Arc<dyn FilesCache>) -> Result<(), ConfigError> {
        self.assert_not_in_use()?;
        self.files_cache = files_cache;
        Ok(())
    }

    /// Returns the files cache.
    pub fn files_cache(&self) -> &Arc<dyn FilesCache> {
        &self.files_cache
    }

    pub fn default_scope(&self) -> NameScope {
        self.default_scope
    }

    pub fn is_in_use(&self) -> bool {
        self.in_use
    }

    /// Initializes the files cache and locks the configuration.
    pub fn init(&mut self) -> Result<(), ConfigError> {
        self.assert_not_in_use()?;
        self.files_cache.init()?;
        self.in_use = true;
        info!("Configuration initialized (default scope: {})", self.default_scope);
        Ok(())
    }

    /// Closes the files cache.
    pub fn close(&mut self) {
        self.files_cache.close();
        info!("Configuration closed");
    }

    /// Resolves `name` against `base` in the default scope and returns the cached
    /// instance of the result.
    pub fn resolve_name(&self, base: &FileName, name: &str) -> Result<Arc<FileName>, NameError> {
        self.resolve_name_in(base, name, self.default_scope)
    }

    /// Resolves `name` against `base` in `scope` and returns the cached instance of the
    /// result.
    pub fn resolve_name_in(
        &self,
        base: &FileName,
        name: &str,
        scope: NameScope,
    ) -> Result<Arc<FileName>, NameError> {
        let resolved = base.resolve_name_in(name, scope)?;
        if let Some(cached) = self.files_cache.get_name(&resolved) {
            debug!("Files cache hit for {}", cached);
            return Ok(cached);
        }
        Ok(self.files_cache.put_name(resolved))
    }
}
