//! Record completeness validation

use crate::ValidationConfig;
use scrivener_domain::ResolutionRecord;
use std::fmt;
use tracing::debug;

/// A completeness problem found in a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    /// No company name was extracted
    MissingCompanyName,

    /// No registered office was extracted
    MissingRegisteredOffice,

    /// No article/clause/section lines were found
    NoKeyClauses,

    /// No objects/objectives lines were found
    NoObjectives,
}

impl ValidationIssue {
    /// Human-readable message appended to record warnings
    pub fn message(&self) -> &'static str {
        match self {
            ValidationIssue::MissingCompanyName => "Missing company name.",
            ValidationIssue::MissingRegisteredOffice => "Missing registered office.",
            ValidationIssue::NoKeyClauses => "No key clauses detected.",
            ValidationIssue::NoObjectives => "No objectives detected.",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Stateless completeness check over an assembled record
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new Validator with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Validator with every check enabled
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Check a record for missing fields
    ///
    /// Issues are returned in a fixed order: company name, registered office,
    /// key clauses, objectives. The record is left untouched.
    pub fn validate(&self, record: &ResolutionRecord) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.config.require_company_name && record.company_name.is_empty() {
            issues.push(ValidationIssue::MissingCompanyName);
        }

        if self.config.require_registered_office && record.registered_office.is_empty() {
            issues.push(ValidationIssue::MissingRegisteredOffice);
        }

        if self.config.require_key_clauses && record.key_clauses.is_empty() {
            issues.push(ValidationIssue::NoKeyClauses);
        }

        if self.config.require_objectives && record.objectives.is_empty() {
            issues.push(ValidationIssue::NoObjectives);
        }

        debug!("Validation found {} issue(s)", issues.len());
        issues
    }

    /// Check a record and render the issues as warning strings
    pub fn warnings(&self, record: &ResolutionRecord) -> Vec<String> {
        self.validate(record)
            .iter()
            .map(|issue| issue.message().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_complete_record() -> ResolutionRecord {
        ResolutionRecord {
            company_name: "Acme Widgets Private Limited".to_string(),
            registered_office: "12 Harbour Road, Mumbai".to_string(),
            key_clauses: vec!["Article 1 Interpretation".to_string()],
            objectives: vec!["To manufacture widgets".to_string()],
            ..ResolutionRecord::default()
        }
    }

    #[test]
    fn test_complete_record_has_no_issues() {
        let validator = Validator::default_config();
        let record = create_complete_record();
        assert!(validator.validate(&record).is_empty());
    }

    #[test]
    fn test_empty_record_reports_every_issue_in_order() {
        let validator = Validator::default_config();
        let issues = validator.validate(&ResolutionRecord::default());
        assert_eq!(
            issues,
            vec![
                ValidationIssue::MissingCompanyName,
                ValidationIssue::MissingRegisteredOffice,
                ValidationIssue::NoKeyClauses,
                ValidationIssue::NoObjectives,
            ]
        );
    }

    #[test]
    fn test_missing_company_name_message() {
        let validator = Validator::default_config();
        let mut record = create_complete_record();
        record.company_name.clear();

        let warnings = validator.warnings(&record);
        assert_eq!(warnings, vec!["Missing company name."]);
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let validator = Validator::default_config();
        let record = ResolutionRecord::default();
        let before = record.clone();
        let _ = validator.validate(&record);
        assert_eq!(record, before);
    }

    #[test]
    fn test_permissive_skips_structure_checks() {
        let validator = Validator::new(ValidationConfig::permissive());
        let mut record = create_complete_record();
        record.key_clauses.clear();
        record.objectives.clear();
        assert!(validator.validate(&record).is_empty());
    }

    #[test]
    fn test_issue_display_matches_message() {
        assert_eq!(
            ValidationIssue::NoKeyClauses.to_string(),
            "No key clauses detected."
        );
    }
}
