//! Command implementations.

pub mod config;
pub mod draft;
pub mod extract;

pub use self::config::{execute_config, init_config};
pub use self::draft::{draft_document, execute_draft, DraftOutput};
pub use self::extract::{execute_extract, extract_document};
