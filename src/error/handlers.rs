//! Error handlers
//!
//! Reports errors once and maps them to process exit codes.

use crate::error::types::{NameError, VfsError};

/// Report an error at the point it stops propagating and return its exit code
pub fn handle_error(err: &VfsError) -> u8 {
    eprintln!("vfs-names: {}", err);
    error_to_exit_code(err)
}

/// Convert error to a process exit code
pub fn error_to_exit_code(err: &VfsError) -> u8 {
    match err {
        VfsError::Usage(_) => 2,
        VfsError::Name(NameError::InvalidDescendantName(_)) => 3,
        VfsError::Name(NameError::EscapesRoot(_)) => 4,
        VfsError::Name(NameError::UnsupportedScope(_)) => 2,
        VfsError::Name(NameError::InvalidUri(_)) | VfsError::Name(NameError::UnknownScheme(_)) => 5,
        VfsError::Config(_) => 6,
    }
}
