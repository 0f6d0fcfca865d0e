//! Error types for the Extractor
//!
//! Extraction itself never fails; these cover loading and checking
//! configuration.

use thiserror::Error;

/// Errors that can occur while configuring extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration value out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML could not be parsed into a configuration
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration could not be written as TOML
    #[error("Failed to serialize to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
