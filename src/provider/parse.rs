//! URI parsing
//!
//! Turns URI strings into names, picking the backend from the scheme.

use log::debug;
use std::sync::Arc;

use super::{HostBackend, LayeredBackend, LocalBackend, NameFactory};
use crate::error::NameError;
use crate::name::FileName;
use crate::uri::{
    SEPARATOR, SEPARATOR_CHAR, extract_scheme, mask_password, normalize_path, parse_authority,
    split_authority,
};

const LOCAL_SCHEMES: &[&str] = &["file"];
const LAYERED_SCHEMES: &[&str] = &["zip", "jar", "tar", "tgz", "tbz2", "gz", "bz2"];
const HOST_SCHEMES: &[(&str, Option<u16>)] = &[
    ("ftp", Some(21)),
    ("ftps", Some(21)),
    ("sftp", Some(22)),
    ("http", Some(80)),
    ("https", Some(443)),
    ("webdav", Some(80)),
    ("smb", Some(139)),
];

/// The default port of a host based scheme.
pub fn default_port(scheme: &str) -> Option<u16> {
    HOST_SCHEMES
        .iter()
        .find(|(known, _)| *known == scheme)
        .and_then(|(_, port)| *port)
}

/// Parses a URI into a name.
///
/// Supports `file:` names, host based names (`ftp://user@host:port/path`) and layered
/// names (`zip:<outer uri>!/path`). The path part is normalized. Passwords never
/// appear in error messages.
pub fn parse_uri(uri: &str) -> Result<FileName, NameError> {
    let (scheme, rest) = extract_scheme(uri).ok_or_else(|| invalid_uri(uri))?;
    let scheme = scheme.to_ascii_lowercase();

    let name = if LOCAL_SCHEMES.contains(&scheme.as_str()) {
        parse_local(&scheme, rest, uri)?
    } else if LAYERED_SCHEMES.contains(&scheme.as_str()) {
        parse_layered(&scheme, rest, uri)?
    } else if HOST_SCHEMES.iter().any(|(known, _)| *known == scheme) {
        parse_host(&scheme, rest)?
    } else {
        return Err(NameError::UnknownScheme(scheme));
    };

    debug!("Parsed {} as a {} name", name, name.scheme());
    Ok(name)
}

fn invalid_uri(uri: &str) -> NameError {
    NameError::InvalidUri(mask_password(uri))
}

fn absolute_path(raw: &str) -> Result<String, NameError> {
    let mut path = raw.to_string();
    normalize_path(&mut path)?;
    if path.is_empty() {
        path.push_str(SEPARATOR);
    }
    Ok(path)
}

fn parse_local(scheme: &str, rest: &str, uri: &str) -> Result<FileName, NameError> {
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    if !rest.starts_with(SEPARATOR_CHAR) {
        return Err(invalid_uri(uri));
    }

    let path = absolute_path(rest)?;
    Ok(Arc::new(LocalBackend::new()).create_name(scheme, path))
}

fn parse_host(scheme: &str, rest: &str) -> Result<FileName, NameError> {
    let (authority, path) = split_authority(rest)
        .ok_or_else(|| NameError::InvalidUri(format!("missing authority in {} URI", scheme)))?;
    let authority = parse_authority(authority)?;

    let mut backend = HostBackend::new(authority.host, default_port(scheme));
    if let Some(port) = authority.port {
        backend = backend.with_port(port);
    }
    if let Some(user_name) = authority.user_name {
        backend = backend.with_credentials(user_name, authority.password);
    }

    let path = absolute_path(path)?;
    Ok(Arc::new(backend).create_name(scheme, path))
}

/// Splits `<outer uri>!<path>` at the last `!` that ends the string or is followed by
/// a separator, so entry paths may themselves contain `!`.
fn split_layered(rest: &str) -> Option<(&str, &str)> {
    rest.match_indices('!')
        .map(|(idx, _)| idx)
        .rev()
        .find(|&idx| {
            let path = &rest[idx + 1..];
            path.is_empty() || path.starts_with(SEPARATOR_CHAR)
        })
        .map(|idx| (&rest[..idx], &rest[idx + 1..]))
}

fn parse_layered(scheme: &str, rest: &str, uri: &str) -> Result<FileName, NameError> {
    let (outer, path) = match split_layered(rest) {
        Some(parts) => parts,
        None if rest.contains('!') => return Err(invalid_uri(uri)),
        None => (rest, SEPARATOR),
    };

    let outer = parse_uri(outer)?;
    let path = absolute_path(path)?;
    Ok(Arc::new(LayeredBackend::new(outer)).create_name(scheme, path))
}
