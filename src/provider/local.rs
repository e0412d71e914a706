//! Local file names

use std::sync::Arc;

use super::{NameFactory, RootUriBuilder};
use crate::name::FileName;
use crate::uri::SEPARATOR;

/// Backend for names on the local file system.
///
/// `root_file` is the prefix of the root directory: `/` on Unix, `/C:/` for a drive or
/// `//server/share/` for a network share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBackend {
    root_file: String,
}

impl LocalBackend {
    pub fn new() -> Self {
        Self {
            root_file: SEPARATOR.to_string(),
        }
    }

    pub fn with_root(root_file: impl Into<String>) -> Self {
        Self {
            root_file: root_file.into(),
        }
    }

    pub fn root_file(&self) -> &str {
        &self.root_file
    }
}

impl Default for LocalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RootUriBuilder for LocalBackend {
    fn append_root_uri(&self, scheme: &str, buffer: &mut String) {
        buffer.push_str(scheme);
        buffer.push_str("://");
        buffer.push_str(&self.root_file);
    }
}

impl NameFactory for LocalBackend {
    fn create_name(self: Arc<Self>, scheme: &str, path: String) -> FileName {
        FileName::new(scheme, path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_root() {
        let name = FileName::new("file", "/tmp/x", Arc::new(LocalBackend::new()));
        assert_eq!(name.root_uri(), "file://");
        assert_eq!(name.uri(), "file:///tmp/x");
    }

    #[test]
    fn test_drive_root() {
        let name = FileName::new("file", "/temp", Arc::new(LocalBackend::with_root("/C:/")));
        assert_eq!(name.root_uri(), "file:///C:");
        assert_eq!(name.uri(), "file:///C:/temp");
    }

    #[test]
    fn test_different_roots_are_different_names() {
        let c = FileName::new("file", "/x", Arc::new(LocalBackend::with_root("/C:/")));
        let d = FileName::new("file", "/x", Arc::new(LocalBackend::with_root("/D:/")));
        assert_ne!(c, d);
    }
}
