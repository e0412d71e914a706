//! Name scopes
//!
//! A scope constrains where a path may lie relative to a base path.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::NameError;
use crate::uri::SEPARATOR_CHAR;

/// The relationship a path must have to a base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum NameScope {
    /// Anywhere on the same file system.
    #[default]
    FileSystem,
    /// An immediate child of the base.
    Child,
    /// Any descendant of the base, excluding the base itself.
    Descendent,
    /// The base itself or any descendant of it.
    DescendentOrSelf,
}

impl NameScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameScope::FileSystem => "file_system",
            NameScope::Child => "child",
            NameScope::Descendent => "descendent",
            NameScope::DescendentOrSelf => "descendent_or_self",
        }
    }
}

impl fmt::Display for NameScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameScope {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "file_system" | "filesystem" => Ok(NameScope::FileSystem),
            "child" => Ok(NameScope::Child),
            "descendent" | "descendant" => Ok(NameScope::Descendent),
            "descendent_or_self" | "descendant_or_self" => Ok(NameScope::DescendentOrSelf),
            _ => Err(NameError::UnsupportedScope(s.to_string())),
        }
    }
}

impl TryFrom<String> for NameScope {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Checks whether `path` fits in `scope` relative to `base_path`.
///
/// Both paths must be absolute and normalized.
pub fn check_name(base_path: &str, path: &str, scope: NameScope) -> bool {
    if scope == NameScope::FileSystem {
        return true;
    }

    let Some(rest) = path.strip_prefix(base_path) else {
        return false;
    };
    let base_is_root = base_path.len() == 1;
    let on_boundary = base_is_root || rest.starts_with(SEPARATOR_CHAR);

    match scope {
        NameScope::FileSystem => true,
        NameScope::Child => {
            let segment = rest.strip_prefix(SEPARATOR_CHAR).unwrap_or(rest);
            !rest.is_empty() && on_boundary && !segment.contains(SEPARATOR_CHAR)
        }
        NameScope::Descendent => !rest.is_empty() && on_boundary,
        NameScope::DescendentOrSelf => rest.is_empty() || on_boundary,
    }
}
