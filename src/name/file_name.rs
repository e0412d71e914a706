//! Module `file_name`
//!
//! Defines the `FileName` value type: the identity of a location inside one virtual
//! file system, plus the lazily computed attributes derived from it.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::error::NameError;
use crate::name::path_ops;
use crate::name::relative::relative_path;
use crate::name::resolver::resolve_path;
use crate::name::scope::{NameScope, check_name};
use crate::provider::{NameBackend, NameFactory, RootUriBuilder};
use crate::uri::SEPARATOR_CHAR;

/// The name of a file within a virtual file system.
///
/// A name is a scheme plus an absolute, normalized path. The backend supplies the root
/// URI prefix and builds new names of the same kind during resolution. Derived
/// attributes are computed on first use and never recomputed.
///
/// Two names are equal when their root URIs and paths are equal.
#[derive(Clone)]
pub struct FileName {
    scheme: String,
    path: String,
    backend: Arc<dyn NameBackend>,
    base_name: OnceLock<String>,
    extension: OnceLock<String>,
    root_uri: OnceLock<String>,
    uri: OnceLock<String>,
}

impl FileName {
    /// Creates a name. `path` must already be absolute and normalized.
    pub fn new(
        scheme: impl Into<String>,
        path: impl Into<String>,
        backend: Arc<dyn NameBackend>,
    ) -> Self {
        let path = path.into();
        debug_assert!(path.starts_with(SEPARATOR_CHAR), "path must be absolute: {path}");

        Self {
            scheme: scheme.into(),
            path,
            backend,
            base_name: OnceLock::new(),
            extension: OnceLock::new(),
            root_uri: OnceLock::new(),
            uri: OnceLock::new(),
        }
    }

    // --------------------
    // Identity
    // --------------------

    /// Returns the URI scheme of this name.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the absolute path of this name within its file system.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the backend that built this name.
    pub fn backend(&self) -> &Arc<dyn NameBackend> {
        &self.backend
    }

    // --------------------
    // Derived attributes
    // --------------------

    /// Returns the last segment of the path. Empty for the root.
    pub fn base_name(&self) -> &str {
        self.base_name.get_or_init(|| path_ops::base_name(&self.path).to_string())
    }

    /// Returns the extension as defined by [`path_ops::extension`].
    pub fn extension(&self) -> &str {
        self.extension.get_or_init(|| path_ops::extension(self.base_name()).to_string())
    }

    /// Returns the number of segments in the path. The root has depth 0.
    pub fn depth(&self) -> usize {
        path_ops::depth(&self.path)
    }

    /// Returns the name of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<FileName> {
        let parent = path_ops::parent_path(&self.path)?;
        Some(self.create_name(parent.to_string()))
    }

    /// Returns the root URI of the file system this name belongs to, without a
    /// trailing separator.
    pub fn root_uri(&self) -> &str {
        self.root_uri.get_or_init(|| {
            let mut buffer = String::new();
            self.backend.append_root_uri(&self.scheme, &mut buffer);
            if buffer.ends_with(SEPARATOR_CHAR) {
                buffer.pop();
            }
            buffer
        })
    }

    /// Returns the absolute URI of this name.
    pub fn uri(&self) -> &str {
        self.uri.get_or_init(|| format!("{}{}", self.root_uri(), self.path))
    }

    // --------------------
    // Resolution
    // --------------------

    /// Resolves `name` anywhere on this file system.
    ///
    /// Absolute names are taken from the root of the file system, relative names from
    /// this name.
    pub fn resolve_name(&self, name: &str) -> Result<FileName, NameError> {
        self.resolve_name_in(name, NameScope::FileSystem)
    }

    /// Resolves `name` relative to this name and checks the result against `scope`.
    pub fn resolve_name_in(&self, name: &str, scope: NameScope) -> Result<FileName, NameError> {
        let path = resolve_path(&self.path, name, scope)?;
        Ok(self.create_name(path))
    }

    /// Returns the relative path that leads from this name to `name`.
    pub fn relative_name(&self, name: &FileName) -> String {
        relative_path(&self.path, &name.path)
    }

    // --------------------
    // Relationships
    // --------------------

    /// Returns whether this name is a strict ancestor of `other`.
    pub fn is_ancestor_of(&self, other: &FileName) -> bool {
        self.root_uri() == other.root_uri()
            && check_name(&self.path, &other.path, NameScope::Descendent)
    }

    /// Returns whether this name is a strict descendant of `base`.
    ///
    /// This is the inverse of [`FileName::is_ancestor_of`].
    pub fn is_descendent_of(&self, base: &FileName) -> bool {
        self.is_descendent_of_in(base, NameScope::Descendent)
    }

    /// Returns whether this name lies within `scope` of `base`.
    pub fn is_descendent_of_in(&self, base: &FileName, scope: NameScope) -> bool {
        self.root_uri() == base.root_uri() && check_name(&base.path, &self.path, scope)
    }

    fn create_name(&self, path: String) -> FileName {
        Arc::clone(&self.backend).create_name(&self.scheme, path)
    }
}

impl PartialEq for FileName {
    fn eq(&self, other: &Self) -> bool {
        self.root_uri() == other.root_uri() && self.path == other.path
    }
}

impl Eq for FileName {}

impl Hash for FileName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root_uri().hash(state);
        self.path.hash(state);
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

impl fmt::Debug for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileName")
            .field("scheme", &self.scheme)
            .field("path", &self.path)
            .field("backend", &self.backend)
            .finish()
    }
}
