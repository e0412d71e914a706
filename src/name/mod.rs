//! File names
//!
//! The identity of a file inside a virtual file system and the path algebra used to
//! derive, resolve and compare names.

mod file_name;
pub mod path_ops;
mod relative;
mod resolver;
mod scope;

// Re-export public types and functions
pub use file_name::FileName;
pub use relative::relative_path;
pub use resolver::resolve_path;
pub use scope::{NameScope, check_name};
