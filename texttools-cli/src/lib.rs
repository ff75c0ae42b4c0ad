//! TextTools CLI library
//!
//! This library provides the command-line interface for TextTools:
//! document analysis, folder word tables and corpus comparison.

pub mod commands;
pub mod config;
pub mod error;
pub mod progress;

pub use commands::{run, Cli};
pub use error::{CliError, CliResult};
