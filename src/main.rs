//! vfs-names - Entry Point
//!
//! Resolves, relates and inspects virtual file system names from the command line.

use log::debug;
use std::process::ExitCode;

use vfs_names::cli::{handle_command, parse_command};
use vfs_names::config::VfsConfig;
use vfs_names::error::VfsError;
use vfs_names::error::handlers::handle_error;
use vfs_names::utils::logging::setup_logging;
use vfs_names::GlobalConfiguration;

fn run(args: &[String]) -> Result<String, VfsError> {
    let settings = VfsConfig::load()?;
    debug!("Loaded configuration: {:?}", settings);

    let mut config = GlobalConfiguration::from_config(&settings);
    config.init()?;

    let result = handle_command(parse_command(args), &config);
    config.close();
    result
}

fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    setup_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => ExitCode::from(handle_error(&e)),
    }
}
