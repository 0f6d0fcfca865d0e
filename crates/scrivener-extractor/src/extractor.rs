//! Core Extractor implementation

use crate::assembler::{assemble, ExtractedFields};
use crate::chunking::ArticleChunker;
use crate::config::ExtractorConfig;
use crate::fields;
use scrivener_domain::ResolutionRecord;
use scrivener_reasoning::{suggest_authorities, Validator};
use std::collections::HashSet;
use tracing::{debug, info};

/// The Extractor turns document text into a [`ResolutionRecord`]
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    chunker: ArticleChunker,
    validator: Validator,
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            chunker: ArticleChunker::new(),
            validator: Validator::new(config.validation.clone()),
            config,
        }
    }

    /// Extract and assemble a record
    ///
    /// Carries only the assembler's warnings and no authorities.
    pub fn extract(&self, text: &str) -> ResolutionRecord {
        info!("Starting extraction, text length {}", text.len());

        let normalized = if self.config.chunk_by_articles {
            let normalized = self.chunker.normalize(text);
            debug!("Normalized text to {} bytes", normalized.len());
            normalized
        } else {
            text.to_string()
        };

        let fields = self.extract_fields(&normalized);
        let record = assemble(fields);

        info!(
            "Extraction complete: document type '{}', {} clause(s), {} warning(s)",
            record.document_type,
            record.key_clauses.len(),
            record.warnings.len()
        );
        record
    }

    /// Extract, then append authority references and validation warnings
    pub fn process(&self, text: &str) -> ResolutionRecord {
        let mut record = self.extract(text);

        let authorities = suggest_authorities(record.document_type.as_str());
        debug!("Suggested {} authority reference(s)", authorities.len());
        record.extend_authorities(authorities);

        if self.config.run_validator {
            let issues = self.validator.warnings(&record);
            record.extend_warnings(issues);
        }

        if self.config.dedupe_warnings {
            let mut seen = HashSet::new();
            record.warnings.retain(|w| seen.insert(w.clone()));
        }

        record
    }

    /// Run every field extractor over normalized text
    pub fn extract_fields(&self, text: &str) -> ExtractedFields {
        let fields = ExtractedFields {
            document_type: fields::classify_document(text),
            company_name: fields::company_name(text),
            registered_office: fields::registered_office(
                text,
                self.config.max_office_continuation_lines,
            ),
            share_capital: fields::share_capital(text),
            directors: fields::directors(text),
            objectives: fields::objectives(text),
            key_dates: fields::key_dates(text),
            key_clauses: fields::key_clauses(text),
            parties: fields::parties(text),
            governance_notes: fields::governance_notes(text),
        };

        debug!(
            "Fields: company {:?}, office {:?}, {} director(s), {} date(s), {} part(ies)",
            fields.company_name,
            fields.registered_office,
            fields.directors.len(),
            fields.key_dates.len(),
            fields.parties.len()
        );
        fields
    }
}
