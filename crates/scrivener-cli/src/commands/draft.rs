//! Draft command implementation.

use crate::cli::DraftArgs;
use crate::commands::extract::extract_document;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::writer::{write_json, write_txt, DRAFT_FILE_NAME, RECORD_FILE_NAME};
use chrono::NaiveDate;
use scrivener_domain::ResolutionRecord;
use scrivener_drafting::Drafter;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Result of drafting one document.
#[derive(Debug)]
pub struct DraftOutput {
    /// The processed record
    pub record: ResolutionRecord,

    /// Rendered draft text
    pub draft: String,

    /// Where the draft was written (`None` with `--stdout`)
    pub draft_path: Option<PathBuf>,

    /// Where the record JSON was written (`None` with `--stdout`)
    pub record_path: Option<PathBuf>,
}

/// Execute the draft command.
pub fn execute_draft(args: DraftArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let output = draft_document(&args, config)?;

    if args.stdout {
        println!("{}", output.draft);
        return Ok(());
    }

    let written = |path: &Option<PathBuf>| {
        path.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    };

    match formatter.format() {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "draft_path": written(&output.draft_path),
                "record_path": written(&output.record_path),
                "warnings": output.record.warnings,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Table => {
            let draft_path = written(&output.draft_path);
            let record_path = written(&output.record_path);
            println!("{}", formatter.success(&format!("Draft written to {}", draft_path)));
            println!("{}", formatter.success(&format!("Record written to {}", record_path)));
            for warning in &output.record.warnings {
                println!("{}", formatter.warning(warning));
            }
        }
        OutputFormat::Quiet => {
            for warning in &output.record.warnings {
                println!("{}", warning);
            }
        }
    }

    Ok(())
}

/// Extract a document, render its draft and write both outputs.
///
/// With `stdout` set nothing is written and both paths are `None`.
pub fn draft_document(args: &DraftArgs, config: &Config) -> Result<DraftOutput> {
    let record = extract_document(&args.file, config)?;
    let instructions = read_instructions(args)?;

    let drafter = Drafter::new(config.drafting.clone());
    let draft = match &args.date {
        Some(date) => drafter.draft_on(&record, &instructions, parse_date(date)?),
        None => drafter.draft(&record, &instructions),
    };

    if args.stdout {
        return Ok(DraftOutput {
            record,
            draft,
            draft_path: None,
            record_path: None,
        });
    }

    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| config.settings.output_dir.clone());

    let draft_path = out_dir.join(DRAFT_FILE_NAME);
    write_txt(&draft, &draft_path)?;

    let record_path = out_dir.join(RECORD_FILE_NAME);
    write_json(&record, &record_path)?;

    info!(
        "Drafted {} into {}",
        args.file.display(),
        out_dir.display()
    );

    Ok(DraftOutput {
        record,
        draft,
        draft_path: Some(draft_path),
        record_path: Some(record_path),
    })
}

fn read_instructions(args: &DraftArgs) -> Result<String> {
    if let Some(text) = &args.instructions {
        return Ok(text.clone());
    }
    match &args.instructions_file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(String::new()),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        CliError::InvalidInput(format!(
            "Invalid date '{}': {}. Expected YYYY-MM-DD",
            value, e
        ))
    })
}
