//! Layered names
//!
//! Names inside a container file, such as an entry of a zip archive:
//! `zip:file:///tmp/a.zip!/dir/entry`.

use std::sync::Arc;

use super::{NameFactory, RootUriBuilder};
use crate::name::FileName;

/// Backend for names nested inside another file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayeredBackend {
    outer: FileName,
}

impl LayeredBackend {
    pub fn new(outer: FileName) -> Self {
        Self { outer }
    }

    /// The name of the container file.
    pub fn outer_name(&self) -> &FileName {
        &self.outer
    }
}

impl RootUriBuilder for LayeredBackend {
    fn append_root_uri(&self, scheme: &str, buffer: &mut String) {
        buffer.push_str(scheme);
        buffer.push(':');
        buffer.push_str(self.outer.uri());
        buffer.push('!');
    }
}

impl NameFactory for LayeredBackend {
    fn create_name(self: Arc<Self>, scheme: &str, path: String) -> FileName {
        FileName::new(scheme, path, self)
    }
}
