//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::loader::load_document;
use crate::output::Formatter;
use scrivener_domain::ResolutionRecord;
use scrivener_extractor::Extractor;
use std::path::Path;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let record = extract_document(&args.file, config)?;

    let output = formatter.format_record(&record)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

/// Load a document and run the full extraction pipeline over it.
pub fn extract_document(path: &Path, config: &Config) -> Result<ResolutionRecord> {
    let text = load_document(path, config.settings.max_input_bytes)?;
    let extractor = Extractor::new(config.extractor.clone());
    Ok(extractor.process(&text))
}
