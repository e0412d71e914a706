//! Path normalization and URI splitting

use std::fmt;

use super::{PASSWORD_PLACEHOLDER, SEPARATOR, SEPARATOR_CHAR};
use crate::error::NameError;

/// Rewrites every recognized separator variant to the canonical `/`.
pub fn fix_separators(path: &mut String) {
    if path.contains('\\') {
        *path = path.replace('\\', SEPARATOR);
    }
}

/// Normalizes a path in place.
///
/// Empty and `.` segments are dropped, each `..` removes the segment before it and a
/// trailing separator is stripped unless the path is the root. Absolute paths stay
/// absolute and relative paths stay relative.
///
/// Fails with [`NameError::EscapesRoot`] when a `..` has no segment left to remove.
pub fn normalize_path(path: &mut String) -> Result<(), NameError> {
    if path.is_empty() {
        return Ok(());
    }

    fix_separators(path);
    let absolute = path.starts_with(SEPARATOR_CHAR);

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(SEPARATOR_CHAR) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(NameError::EscapesRoot(path.clone()));
                }
            }
            other => segments.push(other),
        }
    }

    let mut normalized = String::with_capacity(path.len());
    if absolute {
        normalized.push(SEPARATOR_CHAR);
    }
    normalized.push_str(&segments.join(SEPARATOR));
    *path = normalized;

    Ok(())
}

/// Splits `scheme:rest` using the RFC 2396 scheme grammar.
///
/// Returns `None` when the input has no valid scheme prefix.
pub fn extract_scheme(uri: &str) -> Option<(&str, &str)> {
    let colon = uri.find(':')?;
    let scheme = &uri[..colon];

    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }

    Some((scheme, &uri[colon + 1..]))
}

/// Splits `//authority/path` into its authority and path.
///
/// The path keeps its leading separator and defaults to the root.
pub fn split_authority(rest: &str) -> Option<(&str, &str)> {
    let rest = rest.strip_prefix("//")?;
    match rest.find(SEPARATOR_CHAR) {
        Some(idx) => Some((&rest[..idx], &rest[idx..])),
        None => Some((rest, SEPARATOR)),
    }
}

/// Replaces the password of every `//user:password@host` authority in `uri` with a
/// placeholder. Text without an authority is returned unchanged.
pub fn mask_password(uri: &str) -> String {
    let mut masked = String::with_capacity(uri.len());
    let mut rest = uri;

    while let Some(idx) = rest.find("//") {
        let (head, tail) = rest.split_at(idx + 2);
        masked.push_str(head);

        let end = tail.find(SEPARATOR_CHAR).unwrap_or(tail.len());
        let authority = &tail[..end];
        match authority.rfind('@') {
            Some(at) => match authority[..at].split_once(':') {
                Some((user, _)) => {
                    masked.push_str(user);
                    masked.push(':');
                    masked.push_str(PASSWORD_PLACEHOLDER);
                    masked.push_str(&authority[at..]);
                }
                None => masked.push_str(authority),
            },
            None => masked.push_str(authority),
        }
        rest = &tail[end..];
    }

    masked.push_str(rest);
    masked
}

/// The parts of a `[user[:password]@]host[:port]` authority.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Authority {
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub host: String,
    pub port: Option<u16>,
}

impl fmt::Debug for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authority")
            .field("user_name", &self.user_name)
            .field("password", &self.password.as_ref().map(|_| PASSWORD_PLACEHOLDER))
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Parses an authority component.
pub fn parse_authority(authority: &str) -> Result<Authority, NameError> {
    let (user_info, host_port) = match authority.rfind('@') {
        Some(idx) => (Some(&authority[..idx]), &authority[idx + 1..]),
        None => (None, authority),
    };

    let (user_name, password) = match user_info {
        Some(info) => match info.split_once(':') {
            Some((user, password)) => (Some(user.to_string()), Some(password.to_string())),
            None => (Some(info.to_string()), None),
        },
        None => (None, None),
    };

    let (host, port) = match host_port.rsplit_once(':') {
        Some((host, port)) => {
            let port = port.parse::<u16>().map_err(|_| {
                NameError::InvalidUri(format!("bad port in \"{}\"", host_port))
            })?;
            (host, Some(port))
        }
        None => (host_port, None),
    };

    if host.is_empty() {
        return Err(NameError::InvalidUri("missing host name".into()));
    }

    Ok(Authority {
        user_name,
        password,
        host: host.to_ascii_lowercase(),
        port,
    })
}
