//! Storage backend hooks
//!
//! A backend supplies the scheme specific root URI prefix of its names and builds new
//! names of its own kind. The resolver itself never looks inside a backend.

mod host;
mod layered;
mod local;
mod parse;

use std::fmt;
use std::sync::Arc;

use crate::name::FileName;

pub use host::HostBackend;
pub use layered::LayeredBackend;
pub use local::LocalBackend;
pub use parse::{default_port, parse_uri};

/// Builds the root URI prefix of a file system.
pub trait RootUriBuilder {
    /// Appends the scheme and authority of this file system to `buffer`.
    ///
    /// A single trailing separator is allowed; [`FileName::root_uri`] strips it.
    fn append_root_uri(&self, scheme: &str, buffer: &mut String);
}

/// Builds names of one backend's kind.
pub trait NameFactory {
    /// Creates a name sharing this backend's identity data. `path` is absolute and
    /// normalized.
    fn create_name(self: Arc<Self>, scheme: &str, path: String) -> FileName;
}

/// Everything a backend must provide for its names.
pub trait NameBackend: RootUriBuilder + NameFactory + fmt::Debug + Send + Sync {}

impl<T> NameBackend for T where T: RootUriBuilder + NameFactory + fmt::Debug + Send + Sync {}
