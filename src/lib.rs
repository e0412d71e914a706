//! vfs-names
//!
//! The naming layer of a virtual file system: file name identity, resolution of
//! relative names, relative path calculation and scope checks, without touching
//! storage.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod name;
pub mod provider;
pub mod uri;
pub mod utils;

pub use cache::GlobalConfiguration;
pub use error::{ConfigError, NameError, VfsError};
pub use name::{FileName, NameScope};
