//! Relative path calculation
//!
//! Computes the path that leads from one name to another using `..` segments to climb
//! and forward segments to descend.

use crate::uri::{SEPARATOR, SEPARATOR_CHAR};

const CURRENT: &str = ".";
const PARENT: &str = "..";

fn segments(path: &str) -> Vec<&str> {
    path.split(SEPARATOR_CHAR)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Returns the relative path from `base_path` to `target_path`.
///
/// Both paths must be absolute and normalized. Identical paths give `"."`, descendants
/// give their path below the base, and anything else climbs with one `..` per base
/// segment below the common ancestor before descending to the target.
pub fn relative_path(base_path: &str, target_path: &str) -> String {
    if base_path == SEPARATOR {
        return match target_path.strip_prefix(SEPARATOR_CHAR) {
            Some("") | None => CURRENT.to_string(),
            Some(rest) => rest.to_string(),
        };
    }

    let base = segments(base_path);
    let target = segments(target_path);

    let common = base
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let ascent = base.len() - common;
    let descent = &target[common..];

    if ascent == 0 && descent.is_empty() {
        return CURRENT.to_string();
    }

    let mut parts: Vec<&str> = Vec::with_capacity(ascent + descent.len());
    parts.extend(std::iter::repeat_n(PARENT, ascent));
    parts.extend_from_slice(descent);
    parts.join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_cases() {
        assert_eq!(relative_path("/", "/"), ".");
        assert_eq!(relative_path("/", "/a/b"), "a/b");
        assert_eq!(relative_path("/a/b", "/"), "../..");
        assert_eq!(relative_path("/a", "/"), "..");
    }

    #[test]
    fn test_same_name() {
        assert_eq!(relative_path("/usr/local", "/usr/local"), ".");
    }

    #[test]
    fn test_descendant() {
        assert_eq!(relative_path("/usr/local", "/usr/local/bin/tool"), "bin/tool");
        assert_eq!(relative_path("/a", "/a/b"), "b");
    }

    #[test]
    fn test_divergent_branches() {
        assert_eq!(relative_path("/usr/local/bin", "/usr/share"), "../../share");
        assert_eq!(relative_path("/a/b", "/a/c"), "../c");
        assert_eq!(relative_path("/a/b/c", "/x/y"), "../../../x/y");
    }

    #[test]
    fn test_common_character_prefix_is_not_a_common_segment() {
        assert_eq!(relative_path("/a/b", "/a/bc"), "../bc");
        assert_eq!(relative_path("/a/bc", "/a/b"), "../b");
        assert_eq!(relative_path("/a/bc/d", "/a/b"), "../../b");
        assert_eq!(relative_path("/ab/c", "/a"), "../../a");
    }

    #[test]
    fn test_ancestor() {
        assert_eq!(relative_path("/a/b/c", "/a"), "../..");
        assert_eq!(relative_path("/a/b", "/a"), "..");
    }
}
