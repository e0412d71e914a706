//! Command line interface
//!
//! Parses arguments and runs naming commands for the `vfs-names` tool.

mod handlers;
mod parser;

pub use handlers::{USAGE, handle_command};
pub use parser::{Command, parse_command};
