//! Record assembly from independent extractor outputs

use scrivener_domain::{DocumentType, Party, ResolutionRecord};
use std::collections::BTreeSet;

/// Warning raised when no company name was extracted
pub const COMPANY_NAME_WARNING: &str = "Company name not detected; confirm manually.";

/// Warning raised when no registered office was extracted
pub const REGISTERED_OFFICE_WARNING: &str =
    "Registered office not detected; confirm address manually.";

/// One value per field extractor, before assembly
#[derive(Debug, Clone, Default)]
pub struct ExtractedFields {
    /// Keyword classification
    pub document_type: DocumentType,

    /// Company name (may be empty)
    pub company_name: String,

    /// Registered office (may be empty)
    pub registered_office: String,

    /// Share capital (may be empty)
    pub share_capital: String,

    /// Director remainders
    pub directors: Vec<String>,

    /// Objectives remainders
    pub objectives: Vec<String>,

    /// Sorted, deduplicated date tokens
    pub key_dates: BTreeSet<String>,

    /// Verbatim clause lines
    pub key_clauses: Vec<String>,

    /// Discovered parties
    pub parties: Vec<Party>,

    /// Keyword-triggered notes
    pub governance_notes: Vec<String>,
}

/// Combine extractor outputs into a record
///
/// `shareholders` is the list of party names. The only warnings raised here
/// are the missing company name and missing registered office ones.
pub fn assemble(fields: ExtractedFields) -> ResolutionRecord {
    let mut warnings = Vec::new();
    if fields.company_name.is_empty() {
        warnings.push(COMPANY_NAME_WARNING.to_string());
    }
    if fields.registered_office.is_empty() {
        warnings.push(REGISTERED_OFFICE_WARNING.to_string());
    }

    let shareholders = fields.parties.iter().map(|p| p.name.clone()).collect();

    ResolutionRecord {
        document_type: fields.document_type,
        company_name: fields.company_name,
        registered_office: fields.registered_office,
        key_dates: fields.key_dates,
        directors: fields.directors,
        shareholders,
        share_capital: fields.share_capital,
        objectives: fields.objectives,
        key_clauses: fields.key_clauses,
        governance_notes: fields.governance_notes,
        authorities: Vec::new(),
        parties: fields.parties,
        warnings,
    }
}
