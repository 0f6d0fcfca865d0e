//! Drafting configuration

use serde::{Deserialize, Serialize};

/// Title line opening every draft
pub const DEFAULT_TITLE: &str = "Draft Legal Memorandum/Resolution";

/// Attribution line closing every draft
pub const DEFAULT_ATTRIBUTION: &str = "Prepared by the Legal AI Drafting Assistant.";

/// Configuration for the Drafter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftingConfig {
    /// First line of the draft
    pub title: String,

    /// Last line of the draft
    pub attribution: String,

    /// Replaces the built-in instructions when the caller passes none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_instructions: Option<String>,
}

impl Default for DraftingConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            default_instructions: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DraftingConfig::default();
        assert_eq!(config.title, "Draft Legal Memorandum/Resolution");
        assert_eq!(config.attribution, "Prepared by the Legal AI Drafting Assistant.");
        assert!(config.default_instructions.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: DraftingConfig = toml::from_str("title = \"Board Memo\"").unwrap();
        assert_eq!(config.title, "Board Memo");
        assert_eq!(config.attribution, DEFAULT_ATTRIBUTION);
    }

    #[test]
    fn test_toml_roundtrip_with_instructions() {
        let config = DraftingConfig {
            default_instructions: Some("Keep it short.".to_string()),
            ..DraftingConfig::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: DraftingConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
