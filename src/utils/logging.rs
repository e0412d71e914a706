//! Logging utilities
//!
//! Provides logging setup for the command line tool.

use env_logger::Env;

/// Setup logging, honoring `RUST_LOG` and defaulting to warnings only
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
