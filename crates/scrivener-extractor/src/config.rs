//! Configuration for the Extractor

use crate::error::ExtractorError;
use scrivener_reasoning::ValidationConfig;
use serde::{Deserialize, Serialize};

/// Upper bound for registered office continuation lines
pub const MAX_CONTINUATION_LINES: usize = 10;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Normalize text through the article chunker before extraction
    pub chunk_by_articles: bool,

    /// Lines after a registered office heading that may continue the address
    pub max_office_continuation_lines: usize,

    /// Run the Validator in `Extractor::process`
    pub run_validator: bool,

    /// Drop exact duplicate warnings after validation
    pub dedupe_warnings: bool,

    /// Completeness checks applied by the Validator
    pub validation: ValidationConfig,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_office_continuation_lines > MAX_CONTINUATION_LINES {
            return Err(ExtractorError::Config(format!(
                "max_office_continuation_lines must be at most {} (got {})",
                MAX_CONTINUATION_LINES, self.max_office_continuation_lines
            )));
        }
        Ok(())
    }

    /// Strict preset: deduplicated warnings, every check enabled
    pub fn strict() -> Self {
        Self {
            dedupe_warnings: true,
            ..Self::default()
        }
    }

    /// Correspondence preset: skip the clause and objective checks
    pub fn correspondence() -> Self {
        Self {
            validation: ValidationConfig::permissive(),
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            chunk_by_articles: true,
            max_office_continuation_lines: 3,
            run_validator: true,
            dedupe_warnings: false,
            validation: ValidationConfig::default(),
        }
    }
}
