//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scrivener CLI - Extract governance facts from AoA/MoA text and draft resolutions.
#[derive(Debug, Parser)]
#[command(name = "scrivener")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SCRIVENER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (warnings only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract a structured record from a document
    Extract(ExtractArgs),

    /// Extract, then write a draft resolution and the record
    Draft(DraftArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Plain-text document (.txt, .text, .md)
    pub file: PathBuf,
}

/// Arguments for the draft command.
#[derive(Debug, Clone, Parser)]
pub struct DraftArgs {
    /// Plain-text document (.txt, .text, .md)
    pub file: PathBuf,

    /// Drafting instructions
    #[arg(short, long, conflicts_with = "instructions_file")]
    pub instructions: Option<String>,

    /// Read drafting instructions from a file
    #[arg(long)]
    pub instructions_file: Option<PathBuf>,

    /// Output directory (defaults to settings.output_dir)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Print the draft instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Draft date (YYYY-MM-DD), defaults to today in UTC
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
