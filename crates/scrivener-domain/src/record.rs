//! The resolution record - central artifact passed from extraction to drafting

use crate::document_type::DocumentType;
use crate::party::Party;
use std::collections::BTreeSet;

/// Structured facts extracted from one governance document
///
/// Every sequence field defaults to empty. `key_dates` is a sorted set, so it
/// holds no duplicates and iterates in string order (`"10 May 2020"` sorts
/// before `"2 May 2020"`).
///
/// After assembly only `authorities` and `warnings` grow, through
/// [`ResolutionRecord::extend_authorities`] and
/// [`ResolutionRecord::extend_warnings`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolutionRecord {
    /// Classification derived from keyword presence
    pub document_type: DocumentType,

    /// Company name (may be empty)
    pub company_name: String,

    /// Registered office address (may be empty)
    pub registered_office: String,

    /// Date tokens, deduplicated and sorted as plain strings
    pub key_dates: BTreeSet<String>,

    /// Director lines, in order of appearance
    pub directors: Vec<String>,

    /// Names derived from `parties`
    pub shareholders: Vec<String>,

    /// Share capital statement (may be empty)
    pub share_capital: String,

    /// Objects/objectives entries
    pub objectives: Vec<String>,

    /// Article/clause/section lines, verbatim and in order
    pub key_clauses: Vec<String>,

    /// Fixed advisory notes triggered by keywords
    pub governance_notes: Vec<String>,

    /// Legal authority references (filled after extraction)
    pub authorities: Vec<String>,

    /// Parties discovered in the text
    pub parties: Vec<Party>,

    /// Extraction-time and validation-time warnings
    pub warnings: Vec<String>,
}

impl ResolutionRecord {
    /// Create an empty record of the given type
    pub fn new(document_type: DocumentType) -> Self {
        Self {
            document_type,
            ..Self::default()
        }
    }

    /// Append authority references
    pub fn extend_authorities<I, S>(&mut self, authorities: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authorities
            .extend(authorities.into_iter().map(Into::into));
    }

    /// Append warnings
    pub fn extend_warnings<I, S>(&mut self, warnings: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warnings.extend(warnings.into_iter().map(Into::into));
    }

    /// Whether any warning was raised
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
