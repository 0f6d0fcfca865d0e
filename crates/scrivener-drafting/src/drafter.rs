//! Draft rendering

use crate::config::DraftingConfig;
use crate::instructions::{resolve, DEFAULT_INSTRUCTIONS};
use chrono::{NaiveDate, Utc};
use scrivener_domain::ResolutionRecord;
use tracing::debug;

/// Renders records into draft text
#[derive(Debug, Clone, Default)]
pub struct Drafter {
    config: DraftingConfig,
}

impl Drafter {
    /// Create a new Drafter
    pub fn new(config: DraftingConfig) -> Self {
        Self { config }
    }

    /// Render a draft dated today (UTC)
    pub fn draft(&self, record: &ResolutionRecord, instructions: &str) -> String {
        self.draft_on(record, instructions, Utc::now().date_naive())
    }

    /// Render a draft with an explicit date
    ///
    /// The same record, instructions and date always give the same text.
    pub fn draft_on(
        &self,
        record: &ResolutionRecord,
        instructions: &str,
        date: NaiveDate,
    ) -> String {
        let fallback = self
            .config
            .default_instructions
            .as_deref()
            .unwrap_or(DEFAULT_INSTRUCTIONS);
        let instruction_block = resolve(instructions, fallback);

        let company = match record.company_name.as_str() {
            "" => "TBD",
            name => name,
        };

        let parties: Vec<String> = record.parties.iter().map(ToString::to_string).collect();

        let sections = [
            render_section("Registered Office", scalar(&record.registered_office)),
            render_section("Key Dates", &record.key_dates),
            render_section("Directors", &record.directors),
            render_section("Shareholders", &record.shareholders),
            render_section("Share Capital", scalar(&record.share_capital)),
            render_section("Objectives/Objects", &record.objectives),
            render_section("Key Clauses", &record.key_clauses),
            render_section("Governance Notes", &record.governance_notes),
            render_section("Legal Authority References", &record.authorities),
            render_section("Parties", &parties),
            render_section("Warnings", &record.warnings),
        ];

        let mut draft = String::new();

        draft.push_str(&format!("{}\n", self.config.title));
        draft.push_str(&format!("Date: {}\n", date.format("%Y-%m-%d")));
        draft.push_str(&format!("Document Type: {}\n", record.document_type));
        draft.push_str(&format!("Company: {}\n\n", company));

        draft.push_str("Instructions Applied:\n");
        draft.push_str(instruction_block);
        draft.push_str("\n\n");

        draft.push_str(&sections.join("\n"));
        draft.push('\n');
        draft.push_str(&self.config.attribution);

        debug!("Rendered draft for '{}': {} bytes", company, draft.len());
        draft
    }
}

/// Render a draft dated today (UTC) with the default configuration
pub fn draft_resolution(record: &ResolutionRecord, instructions: &str) -> String {
    Drafter::default().draft(record, instructions)
}

/// Render a draft with an explicit date and the default configuration
pub fn draft_resolution_on(
    record: &ResolutionRecord,
    instructions: &str,
    date: NaiveDate,
) -> String {
    Drafter::default().draft_on(record, instructions, date)
}

/// Title line, one `- entry` line per entry (or `- Not provided`), newline-terminated
fn render_section<I, S>(title: &str, entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut section = format!("{}\n", title);
    let mut empty = true;

    for entry in entries {
        section.push_str(&format!("- {}\n", entry.as_ref()));
        empty = false;
    }
    if empty {
        section.push_str("- Not provided\n");
    }

    section
}

fn scalar(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
