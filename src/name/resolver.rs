//! Name resolution
//!
//! Turns a user supplied, possibly relative, path into a normalized absolute path and
//! checks it against the requested scope.

use log::{debug, warn};

use crate::error::NameError;
use crate::name::scope::{NameScope, check_name};
use crate::uri::{SEPARATOR_CHAR, fix_separators, normalize_path};

/// Resolves `name` against `base_path`.
///
/// Names that do not start with a separator (including the empty name) are taken
/// relative to `base_path`. The result is normalized and must satisfy `scope`
/// relative to `base_path`.
pub fn resolve_path(base_path: &str, name: &str, scope: NameScope) -> Result<String, NameError> {
    let mut buffer = name.to_string();
    fix_separators(&mut buffer);

    if !name.starts_with(SEPARATOR_CHAR) {
        buffer.insert(0, SEPARATOR_CHAR);
        buffer.insert_str(0, base_path);
    }

    normalize_path(&mut buffer)?;

    if !check_name(base_path, &buffer, scope) {
        warn!(
            "Rejected name \"{}\": {} is outside scope {} of {}",
            name, buffer, scope, base_path
        );
        return Err(NameError::InvalidDescendantName(name.to_string()));
    }

    debug!("Resolved \"{}\" against {} to {}", name, base_path, buffer);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_names() {
        assert_eq!(resolve_path("/a", "b", NameScope::FileSystem).unwrap(), "/a/b");
        assert_eq!(resolve_path("/a", "b/../c", NameScope::FileSystem).unwrap(), "/a/c");
        assert_eq!(resolve_path("/a/b", "..", NameScope::FileSystem).unwrap(), "/a");
        assert_eq!(resolve_path("/", "x", NameScope::FileSystem).unwrap(), "/x");
        assert_eq!(resolve_path("/a", ".", NameScope::FileSystem).unwrap(), "/a");
    }

    #[test]
    fn test_empty_name_is_the_base() {
        assert_eq!(resolve_path("/a/b", "", NameScope::FileSystem).unwrap(), "/a/b");
        assert_eq!(resolve_path("/a/b", "", NameScope::DescendentOrSelf).unwrap(), "/a/b");
        assert!(resolve_path("/a/b", "", NameScope::Descendent).is_err());
    }

    #[test]
    fn test_absolute_names_ignore_the_base() {
        assert_eq!(resolve_path("/a/b", "/x/y/", NameScope::FileSystem).unwrap(), "/x/y");
        assert_eq!(resolve_path("/a", "/a/b", NameScope::Child).unwrap(), "/a/b");
    }

    #[test]
    fn test_separators_are_fixed() {
        assert_eq!(resolve_path("/a", "b\\c", NameScope::FileSystem).unwrap(), "/a/b/c");
    }

    #[test]
    fn test_scope_violations_carry_the_raw_name() {
        assert_eq!(
            resolve_path("/a", "../b", NameScope::Descendent),
            Err(NameError::InvalidDescendantName("../b".into()))
        );
        assert_eq!(
            resolve_path("/a", "b/c", NameScope::Child),
            Err(NameError::InvalidDescendantName("b/c".into()))
        );
        assert_eq!(
            resolve_path("/a", "/ab", NameScope::DescendentOrSelf),
            Err(NameError::InvalidDescendantName("/ab".into()))
        );
    }

    #[test]
    fn test_escaping_the_root() {
        let result = resolve_path("/a", "../../escape", NameScope::Descendent);
        assert!(matches!(result, Err(NameError::EscapesRoot(_))));

        let result = resolve_path("/", "..", NameScope::FileSystem);
        assert!(matches!(result, Err(NameError::EscapesRoot(_))));
    }
}
