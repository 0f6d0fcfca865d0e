//! Scrivener Reasoning
//!
//! Post-extraction checks over a completed [`ResolutionRecord`].
//!
//! The crate provides:
//! - Completeness validation (company identity, clauses, objectives)
//! - Legal authority suggestions keyed on document type
//!
//! Neither step mutates the record. The caller appends the results to
//! `warnings` and `authorities`.
//!
//! # Examples
//!
//! ```
//! use scrivener_domain::ResolutionRecord;
//! use scrivener_reasoning::{suggest_authorities, Validator};
//!
//! let record = ResolutionRecord::default();
//! let issues = Validator::default_config().warnings(&record);
//! assert_eq!(issues.len(), 4);
//!
//! let refs = suggest_authorities(record.document_type.as_str());
//! assert_eq!(refs.len(), 1);
//! ```
//!
//! [`ResolutionRecord`]: scrivener_domain::ResolutionRecord

#![warn(missing_docs)]

mod authority;
mod config;
mod validator;

pub use authority::{
    suggest_authorities, ARTICLES_AUTHORITY, GENERAL_AUTHORITY, MEMORANDUM_AUTHORITY,
};
pub use config::ValidationConfig;
pub use validator::{ValidationIssue, Validator};
