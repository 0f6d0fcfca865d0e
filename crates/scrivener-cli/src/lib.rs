//! Scrivener CLI library.
//!
//! This library provides the command-line surface around the extraction and
//! drafting crates: configuration management, document loading, output
//! formatting, file writers and command execution.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod writer;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
