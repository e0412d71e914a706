//! Files cache
//!
//! Keeps resolved names so repeated lookups share one instance and its memoized
//! attributes.

use log::{debug, info};
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::ConfigError;
use crate::name::FileName;

/// A cache of resolved names, keyed by name equality.
pub trait FilesCache: fmt::Debug + Send + Sync {
    /// Prepares the cache for use.
    fn init(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Releases everything held by the cache.
    fn close(&self);

    /// Stores `name` unless an equal name is cached, and returns the cached instance.
    fn put_name(&self, name: FileName) -> Arc<FileName>;

    /// Returns the cached instance equal to `name`, if any.
    fn get_name(&self, name: &FileName) -> Option<Arc<FileName>>;

    fn clear(&self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory cache of every name it is given, up to an optional limit.
#[derive(Debug, Default)]
pub struct DefaultFilesCache {
    names: RwLock<HashSet<Arc<FileName>>>,
    max_entries: Option<usize>,
}

impl DefaultFilesCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that stops storing new names once it holds `max_entries`.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            names: RwLock::default(),
            max_entries: Some(max_entries),
        }
    }
}

impl FilesCache for DefaultFilesCache {
    fn init(&self) -> Result<(), ConfigError> {
        info!("Files cache initialized (limit: {:?})", self.max_entries);
        Ok(())
    }

    fn close(&self) {
        let count = self.len();
        self.clear();
        info!("Files cache closed, released {} names", count);
    }

    fn put_name(&self, name: FileName) -> Arc<FileName> {
        let mut names = self.names.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(cached) = names.get(&name) {
            return Arc::clone(cached);
        }

        let name = Arc::new(name);
        if self.max_entries.is_some_and(|max| names.len() >= max) {
            debug!("Files cache full, not caching {}", name);
            return name;
        }

        names.insert(Arc::clone(&name));
        name
    }

    fn get_name(&self, name: &FileName) -> Option<Arc<FileName>> {
        self.names
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn clear(&self) {
        self.names
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn len(&self) -> usize {
        self.names.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// A cache that never stores anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFilesCache;

impl FilesCache for NullFilesCache {
    fn close(&self) {}

    fn put_name(&self, name: FileName) -> Arc<FileName> {
        Arc::new(name)
    }

    fn get_name(&self, _name: &FileName) -> Option<Arc<FileName>> {
        None
    }

    fn clear(&self) {}

    fn len(&self) -> usize {
        0
    }
}
