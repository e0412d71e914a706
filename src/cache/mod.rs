//! Files cache and its lifecycle
//!
//! Handles reuse of resolved names across lookups.

mod files_cache;
mod global;

pub use files_cache::{DefaultFilesCache, FilesCache, NullFilesCache};
pub use global::GlobalConfiguration;
