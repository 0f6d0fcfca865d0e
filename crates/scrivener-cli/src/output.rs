//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use scrivener_domain::ResolutionRecord;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a record.
    pub fn format_record(&self, record: &ResolutionRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&record_json(record))?),
            OutputFormat::Table => Ok(self.format_record_table(record)),
            OutputFormat::Quiet => Ok(record.warnings.join("\n")),
        }
    }

    /// Format a record as a two-column table.
    fn format_record_table(&self, record: &ResolutionRecord) -> String {
        let parties: Vec<String> = record.parties.iter().map(ToString::to_string).collect();

        let rows = [
            ("Document Type", record.document_type.as_str().to_string()),
            ("Company", scalar_cell(&record.company_name)),
            ("Registered Office", scalar_cell(&record.registered_office)),
            ("Share Capital", scalar_cell(&record.share_capital)),
            ("Key Dates", list_cell(&record.key_dates)),
            ("Directors", list_cell(&record.directors)),
            ("Shareholders", list_cell(&record.shareholders)),
            ("Objectives", list_cell(&record.objectives)),
            ("Key Clauses", list_cell(&record.key_clauses)),
            ("Governance Notes", list_cell(&record.governance_notes)),
            ("Authorities", list_cell(&record.authorities)),
            ("Parties", list_cell(&parties)),
            ("Warnings", list_cell(&record.warnings)),
        ];

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (field, value) in rows {
            builder.push_record([field.to_string(), value]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut output = table.to_string();
        if record.has_warnings() {
            output.push('\n');
            output.push_str(&self.warning(&format!(
                "{} warning(s); review before relying on this record",
                record.warnings.len()
            )));
        }
        output
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// JSON view of a record.
///
/// Keys are the record field names. `document_type` is the label and
/// `parties` a list of `{name, role}` objects.
pub fn record_json(record: &ResolutionRecord) -> serde_json::Value {
    let parties: Vec<serde_json::Value> = record
        .parties
        .iter()
        .map(|p| {
            serde_json::json!({
                "name": p.name,
                "role": p.role.as_str(),
            })
        })
        .collect();

    serde_json::json!({
        "document_type": record.document_type.as_str(),
        "company_name": record.company_name,
        "registered_office": record.registered_office,
        "key_dates": record.key_dates,
        "directors": record.directors,
        "shareholders": record.shareholders,
        "share_capital": record.share_capital,
        "objectives": record.objectives,
        "key_clauses": record.key_clauses,
        "governance_notes": record.governance_notes,
        "authorities": record.authorities,
        "parties": parties,
        "warnings": record.warnings,
    })
}

fn scalar_cell(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn list_cell<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<String> = values.into_iter().map(|v| v.as_ref().to_string()).collect();
    if lines.is_empty() {
        "-".to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrivener_domain::{DocumentType, Party, PartyRole};

    fn create_test_record() -> ResolutionRecord {
        let mut record = ResolutionRecord::new(DocumentType::Articles);
        record.company_name = "Acme Widgets Private Limited".to_string();
        record.key_dates.insert("2 May 2020".to_string());
        record.key_dates.insert("10 May 2020".to_string());
        record.parties.push(Party::new("legal@acme.example", PartyRole::Sender));
        record.extend_warnings(["Registered office not detected; confirm address manually."]);
        record
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_record(&create_test_record()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["document_type"], "Articles of Association");
        assert_eq!(value["key_dates"], serde_json::json!(["10 May 2020", "2 May 2020"]));
        assert_eq!(
            value["parties"],
            serde_json::json!([{"name": "legal@acme.example", "role": "Sender"}])
        );
        assert_eq!(value["registered_office"], "");
    }

    #[test]
    fn test_quiet_format_only_warnings() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_record(&create_test_record()).unwrap();
        assert_eq!(output, "Registered office not detected; confirm address manually.");

        let clean = ResolutionRecord::default();
        assert_eq!(formatter.format_record(&clean).unwrap(), "");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_record(&create_test_record()).unwrap();
        assert!(output.contains("Field"));
        assert!(output.contains("Acme Widgets Private Limited"));
        assert!(output.contains("legal@acme.example (Sender)"));
        assert!(output.contains("⚠ 1 warning(s)"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
