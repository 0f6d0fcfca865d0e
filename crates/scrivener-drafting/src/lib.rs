//! Scrivener Drafting
//!
//! Renders a [`ResolutionRecord`] and free-text instructions into a plain-text
//! draft resolution or memorandum.
//!
//! Drafting never fails. Empty fields are rendered as `- Not provided` and a
//! missing company name as `TBD`.
//!
//! # Example Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use scrivener_domain::ResolutionRecord;
//! use scrivener_drafting::draft_resolution_on;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
//! let draft = draft_resolution_on(&ResolutionRecord::default(), "", date);
//!
//! assert!(draft.starts_with("Draft Legal Memorandum/Resolution\nDate: 2024-06-03\n"));
//! assert!(draft.contains("Company: TBD"));
//! assert!(draft.ends_with("Prepared by the Legal AI Drafting Assistant."));
//! ```
//!
//! [`ResolutionRecord`]: scrivener_domain::ResolutionRecord

#![warn(missing_docs)]

mod config;
mod drafter;
mod instructions;

pub use config::{DraftingConfig, DEFAULT_ATTRIBUTION, DEFAULT_TITLE};
pub use drafter::{draft_resolution, draft_resolution_on, Drafter};
pub use instructions::{build_instruction_block, DEFAULT_INSTRUCTIONS};
