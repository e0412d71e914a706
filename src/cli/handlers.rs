//! Command handlers
//!
//! Executes parsed commands and renders their output.

use log::info;
use std::fmt::Write;

use super::parser::Command;
use crate::cache::GlobalConfiguration;
use crate::error::VfsError;
use crate::name::{FileName, NameScope};
use crate::provider::parse_uri;

pub const USAGE: &str = "\
usage: vfs-names <command>

commands:
  resolve <base-uri> <name> [scope]   resolve a name against a base
  relative <from-uri> <to-uri>        relative path between two names
  info <uri>                          show the attributes of a name
  help                                show this message

scopes: file_system, child, descendent, descendent_or_self";

/// Runs a command and returns the text to print.
pub fn handle_command(command: Command, config: &GlobalConfiguration) -> Result<String, VfsError> {
    match command {
        Command::Resolve { base, name, scope } => handle_cmd_resolve(config, &base, &name, scope),
        Command::Relative { from, to } => handle_cmd_relative(&from, &to),
        Command::Info(uri) => handle_cmd_info(&uri),
        Command::Help => Ok(USAGE.to_string()),
        Command::Unknown(line) => Err(VfsError::Usage(format!(
            "unrecognized command \"{}\"\n\n{}",
            line, USAGE
        ))),
    }
}

fn handle_cmd_resolve(
    config: &GlobalConfiguration,
    base: &str,
    name: &str,
    scope: Option<String>,
) -> Result<String, VfsError> {
    let base = parse_uri(base)?;
    let scope = match scope {
        Some(scope) => scope.parse::<NameScope>()?,
        None => config.default_scope(),
    };

    let resolved = config.resolve_name_in(&base, name, scope)?;
    info!("Resolved {} + {} ({}) -> {}", base, name, scope, resolved);
    Ok(resolved.uri().to_string())
}

fn handle_cmd_relative(from: &str, to: &str) -> Result<String, VfsError> {
    let from = parse_uri(from)?;
    let to = parse_uri(to)?;

    if from.root_uri() != to.root_uri() {
        return Err(VfsError::Usage(format!(
            "{} and {} are on different file systems",
            from, to
        )));
    }

    Ok(from.relative_name(&to))
}

fn handle_cmd_info(uri: &str) -> Result<String, VfsError> {
    let name = parse_uri(uri)?;
    Ok(describe(&name))
}

fn describe(name: &FileName) -> String {
    let parent = name
        .parent()
        .map(|parent| parent.uri().to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "uri:       {}", name.uri());
    let _ = writeln!(out, "scheme:    {}", name.scheme());
    let _ = writeln!(out, "root uri:  {}", name.root_uri());
    let _ = writeln!(out, "path:      {}", name.path());
    let _ = writeln!(out, "base name: {}", name.base_name());
    let _ = writeln!(out, "extension: {}", name.extension());
    let _ = writeln!(out, "depth:     {}", name.depth());
    let _ = write!(out, "parent:    {}", parent);
    out
}
