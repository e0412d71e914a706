//! Path attribute derivation
//!
//! Pure functions over a normalized absolute path.

use crate::uri::{SEPARATOR, SEPARATOR_CHAR};

/// The last segment of the path, or the whole path when it has no separator.
pub fn base_name(path: &str) -> &str {
    match path.rfind(SEPARATOR_CHAR) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// The "extension" of a base name.
///
/// Empty when the name has no `.` or ends with one. Otherwise this returns the text
/// *before* the last `.`, so `archive.tar.gz` yields `archive.tar`. Existing callers
/// depend on that result; see DESIGN.md before changing it.
pub fn extension(base_name: &str) -> &str {
    match base_name.rfind('.') {
        None => "",
        Some(pos) if pos == base_name.len() - 1 => "",
        Some(pos) => &base_name[..pos],
    }
}

/// The path of the parent, or `None` when nothing lies above this path.
pub fn parent_path(path: &str) -> Option<&str> {
    let idx = path.rfind(SEPARATOR_CHAR)?;
    if idx == path.len() - 1 {
        None
    } else if idx == 0 {
        Some(SEPARATOR)
    } else {
        Some(&path[..idx])
    }
}

/// Number of segments in the path. The root has depth 0.
pub fn depth(path: &str) -> usize {
    if path.is_empty() || path == SEPARATOR {
        return 0;
    }
    path.split(SEPARATOR_CHAR)
        .filter(|segment| !segment.is_empty())
        .count()
}
