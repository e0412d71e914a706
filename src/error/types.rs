//! Error types
//!
//! Defines the error types raised while building, resolving and caching file names.

use thiserror::Error;

/// Errors raised by the naming layer.
///
/// Every variant carries the offending input so callers can report it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The resolved path fell outside the requested scope of the base name.
    #[error("Invalid descendant file name \"{0}\"")]
    InvalidDescendantName(String),

    /// A `..` segment would climb above the root of the file system.
    #[error("Invalid relative path \"{0}\": ascends above the file system root")]
    EscapesRoot(String),

    /// A scope name that does not map to any known scope.
    #[error("Unsupported name scope: {0}")]
    UnsupportedScope(String),

    /// A URI that could not be parsed into a file name.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// A URI scheme with no registered backend.
    #[error("Unknown URI scheme: {0}")]
    UnknownScheme(String),
}

/// Errors raised by the configuration and cache lifecycle.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration has been initialized and can no longer be changed.
    #[error("Configuration is already in use")]
    InUse,

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// General error that encompasses all error types of the crate
#[derive(Debug, Error)]
pub enum VfsError {
    #[error("Name error: {0}")]
    Name(#[from] NameError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Usage error: {0}")]
    Usage(String),
}
