//! Configuration management for vfs-names
//!
//! Loads settings from an optional `vfs-names.toml` with `VFS_NAMES_*` environment
//! overrides, on top of built-in defaults.

use config::{Config, Environment, File, FileFormat, Source};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::name::NameScope;

/// Base name of the configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "vfs-names";

/// Prefix of environment overrides, e.g. `VFS_NAMES_DEFAULT_SCOPE=child`
/// or `VFS_NAMES_CACHE__KIND=null`
pub const ENV_PREFIX: &str = "VFS_NAMES";

/// Complete configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct VfsConfig {
    /// Scope applied when resolving names without an explicit scope
    pub default_scope: NameScope,

    pub cache: CacheConfig,
}

/// Files cache settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub kind: CacheKind,

    /// Upper bound on cached names; unbounded when absent
    #[serde(default)]
    pub max_entries: Option<usize>,
}

/// Which files cache implementation to attach
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheKind {
    Default,
    Null,
}

impl Default for VfsConfig {
    fn default() -> Self {
        Self {
            default_scope: NameScope::FileSystem,
            cache: CacheConfig {
                kind: CacheKind::Default,
                max_entries: None,
            },
        }
    }
}

impl VfsConfig {
    /// Load configuration from `vfs-names.toml` (optional) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            File::with_name(CONFIG_FILE).required(false),
            Some(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            ),
        )
    }

    /// Load configuration from TOML text, ignoring the environment
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Self::build(File::from_str(text, FileFormat::Toml), None)
    }

    fn build<S>(source: S, environment: Option<Environment>) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let defaults = VfsConfig::default();

        let mut builder = Config::builder()
            .set_default("default_scope", defaults.default_scope.as_str())?
            .set_default("cache.kind", "default")?
            .add_source(source);
        if let Some(environment) = environment {
            builder = builder.add_source(environment);
        }

        let config: VfsConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.max_entries == Some(0) {
            return Err(ConfigError::Invalid(
                "cache.max_entries must be greater than 0".into(),
            ));
        }

        if self.cache.kind == CacheKind::Null && self.cache.max_entries.is_some() {
            return Err(ConfigError::Invalid(
                "cache.max_entries has no effect with the null cache".into(),
            ));
        }

        Ok(())
    }
}
