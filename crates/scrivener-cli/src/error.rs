//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Extractor configuration rejected
    #[error("Extractor error: {0}")]
    Extractor(#[from] scrivener_extractor::ExtractorError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input file type the loader does not read
    #[error("Unsupported input format: {0} (expected .txt, .text or .md)")]
    UnsupportedFormat(String),

    /// Input file over the configured size limit
    #[error("Input too large: {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge {
        /// Size of the file on disk
        size: u64,
        /// Configured `max_input_bytes`
        limit: u64,
    },
}
