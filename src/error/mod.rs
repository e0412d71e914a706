//! Error handling
//!
//! Defines error types and handling for the naming layer.

pub mod handlers;
pub mod types;

pub use types::*;
