//! Integration tests for loading, writing and drafting through the CLI library.

use chrono::NaiveDate;
use scrivener_cli::cli::DraftArgs;
use scrivener_cli::commands::{draft_document, extract_document, init_config};
use scrivener_cli::config::Config;
use scrivener_cli::loader::load_document;
use scrivener_cli::writer::{write_json, write_txt, DRAFT_FILE_NAME, RECORD_FILE_NAME};
use scrivener_cli::CliError;
use scrivener_domain::{DocumentType, Party, PartyRole, ResolutionRecord};
use scrivener_drafting::draft_resolution_on;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const SAMPLE_AOA: &str = "Articles of Association of Acme Widgets Private Limited
Registered Office: 12 Harbour Road, Mumbai

Article 1 Interpretation
Objects: To manufacture widgets
Adopted on 2 May 2020 and amended on 10 May 2020.
";

fn write_sample(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, SAMPLE_AOA).unwrap();
    path
}

fn draft_args(file: PathBuf, out_dir: PathBuf) -> DraftArgs {
    DraftArgs {
        file,
        instructions: None,
        instructions_file: None,
        out_dir: Some(out_dir),
        stdout: false,
        date: Some("2024-06-03".to_string()),
    }
}

#[test]
fn test_load_supported_extensions() {
    let dir = tempdir().unwrap();
    for name in ["aoa.txt", "aoa.text", "aoa.md", "AOA.TXT", "aoa"] {
        let path = write_sample(dir.path(), name);
        let text = load_document(&path, 1024).unwrap();
        assert_eq!(text, SAMPLE_AOA, "failed for {}", name);
    }
}

#[test]
fn test_load_rejects_unsupported_format() {
    let dir = tempdir().unwrap();
    let path = write_sample(dir.path(), "aoa.pdf");
    let err = load_document(&path, 1024).unwrap_err();
    assert!(matches!(err, CliError::UnsupportedFormat(ref ext) if ext == ".pdf"));
}

#[test]
fn test_load_rejects_oversized_input() {
    let dir = tempdir().unwrap();
    let path = write_sample(dir.path(), "aoa.txt");
    let err = load_document(&path, 10).unwrap_err();
    match err {
        CliError::InputTooLarge { size, limit } => {
            assert_eq!(size, SAMPLE_AOA.len() as u64);
            assert_eq!(limit, 10);
        }
        other => panic!("Expected InputTooLarge, got {:?}", other),
    }
}

#[test]
fn test_load_rejects_invalid_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.txt");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();
    assert!(matches!(
        load_document(&path, 1024),
        Err(CliError::InvalidInput(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    assert!(matches!(load_document(&path, 1024), Err(CliError::Io(_))));
}

#[test]
fn test_writers_create_parent_directories() {
    let dir = tempdir().unwrap();
    let txt_path = dir.path().join("nested/deeper/draft.txt");
    let json_path = dir.path().join("nested/other/record.json");

    let mut record = ResolutionRecord::new(DocumentType::Memorandum);
    record.key_dates.insert("2 May 2020".to_string());
    record.key_dates.insert("10 May 2020".to_string());
    record.parties.push(Party::new("Jane Doe", PartyRole::MemberShareholder));

    write_txt("hello", &txt_path).unwrap();
    write_json(&record, &json_path).unwrap();

    assert_eq!(fs::read_to_string(&txt_path).unwrap(), "hello");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["document_type"], "Memorandum of Association");
    assert_eq!(json["key_dates"], serde_json::json!(["10 May 2020", "2 May 2020"]));
    assert_eq!(json["parties"][0]["role"], "Member/Shareholder");
    assert_eq!(json["authorities"], serde_json::json!([]));
}

#[test]
fn test_extract_document_pipeline() {
    let dir = tempdir().unwrap();
    let path = write_sample(dir.path(), "aoa.txt");

    let record = extract_document(&path, &Config::default()).unwrap();
    assert_eq!(record.company_name, "Acme Widgets Private Limited");
    assert_eq!(record.registered_office, "12 Harbour Road, Mumbai");
    assert_eq!(record.objectives, vec!["To manufacture widgets"]);
    assert_eq!(
        record.key_dates.iter().collect::<Vec<_>>(),
        vec!["10 May 2020", "2 May 2020"]
    );
    assert!(record.warnings.is_empty(), "warnings: {:?}", record.warnings);
}

#[test]
fn test_draft_writes_both_outputs() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path(), "aoa.txt");
    let out_dir = dir.path().join("output");

    let args = draft_args(input, out_dir.clone());
    let output = draft_document(&args, &Config::default()).unwrap();

    let draft_path = out_dir.join(DRAFT_FILE_NAME);
    let record_path = out_dir.join(RECORD_FILE_NAME);
    assert_eq!(output.draft_path.as_deref(), Some(draft_path.as_path()));
    assert_eq!(output.record_path.as_deref(), Some(record_path.as_path()));

    let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    let draft = fs::read_to_string(&draft_path).unwrap();
    assert_eq!(draft, draft_resolution_on(&output.record, "", date));
    assert!(draft.contains("Date: 2024-06-03\n"));
    assert!(draft.contains("Company: Acme Widgets Private Limited\n"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&record_path).unwrap()).unwrap();
    assert_eq!(json["company_name"], "Acme Widgets Private Limited");
    assert_eq!(json["document_type"], "Articles of Association");
}

#[test]
fn test_draft_is_reproducible_with_fixed_date() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path(), "aoa.txt");
    let args = draft_args(input, dir.path().join("out"));

    let first = draft_document(&args, &Config::default()).unwrap();
    let second = draft_document(&args, &Config::default()).unwrap();
    assert_eq!(first.draft, second.draft);
}

#[test]
fn test_draft_stdout_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path(), "aoa.txt");
    let out_dir = dir.path().join("untouched");

    let args = DraftArgs {
        stdout: true,
        ..draft_args(input, out_dir.clone())
    };
    let output = draft_document(&args, &Config::default()).unwrap();

    assert!(output.draft_path.is_none());
    assert!(!out_dir.exists());
    assert!(output.draft.starts_with("Draft Legal Memorandum/Resolution\n"));
}

#[test]
fn test_draft_instructions_file() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path(), "aoa.txt");
    let instructions = dir.path().join("instructions.txt");
    fs::write(&instructions, "\nDraft an ordinary resolution adopting the articles.\n\n").unwrap();

    let args = DraftArgs {
        instructions_file: Some(instructions),
        ..draft_args(input, dir.path().join("out"))
    };
    let output = draft_document(&args, &Config::default()).unwrap();
    assert!(output.draft.contains(
        "Instructions Applied:\nDraft an ordinary resolution adopting the articles.\n\n"
    ));
}

#[test]
fn test_draft_uses_configured_output_dir_and_drafting() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path(), "aoa.txt");

    let mut config = Config::default();
    config.settings.output_dir = dir.path().join("configured");
    config.drafting.title = "Board Memo".to_string();

    let args = DraftArgs {
        out_dir: None,
        ..draft_args(input, PathBuf::new())
    };
    let output = draft_document(&args, &config).unwrap();

    assert!(dir.path().join("configured").join(DRAFT_FILE_NAME).exists());
    assert!(output.draft.starts_with("Board Memo\n"));
}

#[test]
fn test_draft_rejects_bad_date() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path(), "aoa.txt");
    let args = DraftArgs {
        date: Some("June 3rd".to_string()),
        ..draft_args(input, dir.path().join("out"))
    };
    assert!(matches!(
        draft_document(&args, &Config::default()),
        Err(CliError::InvalidInput(_))
    ));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_config_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".scrivener/config.toml");

    let mut config = Config::default();
    config.settings.color = false;
    config.extractor.dedupe_warnings = true;
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_load_missing_gives_defaults() {
    let dir = tempdir().unwrap();
    let loaded = Config::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_config_load_rejects_out_of_range_extractor() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[extractor]\nmax_office_continuation_lines = 50\n").unwrap();
    assert!(matches!(Config::load(&path), Err(CliError::Extractor(_))));
}

#[test]
fn test_config_load_rejects_malformed_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[settings\ncolor = ").unwrap();
    assert!(matches!(Config::load(&path), Err(CliError::Toml(_))));
}

#[test]
fn test_init_config_refuses_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    init_config(&path, false).unwrap();
    assert!(path.exists());
    assert!(matches!(init_config(&path, false), Err(CliError::Config(_))));
    init_config(&path, true).unwrap();
    assert_eq!(Config::load(&path).unwrap(), Config::default());
}
