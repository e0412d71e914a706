//! URI and path string handling
//!
//! Canonicalizes separators, collapses relative segments and splits URIs into their
//! scheme, authority and path parts. Nothing here knows about file names.

mod parser;

pub use parser::{
    Authority, extract_scheme, fix_separators, mask_password, normalize_path, parse_authority,
    split_authority,
};

/// The canonical separator of every file name path.
pub const SEPARATOR_CHAR: char = '/';

/// The canonical separator, as a string. Also the path of every root name.
pub const SEPARATOR: &str = "/";

/// Stands in for a password in every printed URI.
pub const PASSWORD_PLACEHOLDER: &str = "***";
