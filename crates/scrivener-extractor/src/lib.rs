//! Scrivener Extractor
//!
//! Converts corporate-governance text into a structured [`ResolutionRecord`]
//! using ordered, deterministic pattern heuristics.
//!
//! # Architecture
//!
//! ```text
//! Text → Chunker → normalized text → Field Extractors → Assembler
//!      → Authority Advisor + Validator → ResolutionRecord
//! ```
//!
//! # Key Features
//!
//! - **Article Chunking**: Split on article/clause/section headings and rejoin
//! - **Independent Field Extractors**: One pure function per record field
//! - **Tiered Address Detection**: Block scan with an inline fallback
//! - **Advisory Warnings**: Missing data is reported, never raised as an error
//!
//! # Example Usage
//!
//! ```
//! use scrivener_extractor::{Extractor, ExtractorConfig};
//!
//! let extractor = Extractor::new(ExtractorConfig::default());
//! let record = extractor.process(
//!     "Articles of Association of Acme Widgets Private Limited\n\
//!      Registered Office: 12 Harbour Road, Mumbai\n\
//!      Article 1 Interpretation",
//! );
//!
//! assert_eq!(record.company_name, "Acme Widgets Private Limited");
//! assert_eq!(record.registered_office, "12 Harbour Road, Mumbai");
//! assert_eq!(record.document_type.as_str(), "Articles of Association");
//! ```
//!
//! [`ResolutionRecord`]: scrivener_domain::ResolutionRecord

#![warn(missing_docs)]

mod assembler;
mod chunking;
mod config;
mod error;
mod extractor;
pub mod fields;
mod patterns;


pub use assembler::{assemble, ExtractedFields, COMPANY_NAME_WARNING, REGISTERED_OFFICE_WARNING};
pub use chunking::ArticleChunker;
pub use config::{ExtractorConfig, MAX_CONTINUATION_LINES};
pub use error::ExtractorError;
pub use extractor::Extractor;
