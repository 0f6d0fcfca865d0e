//! Scrivener Domain Layer
//!
//! This crate contains the value objects shared by every other Scrivener crate.
//! It has ZERO external dependencies and holds no behaviour beyond construction,
//! labelling and the two append points of a record.
//!
//! ## Key Concepts
//!
//! - **ResolutionRecord**: The structured facts extracted from one document
//! - **Party**: A named participant with the role it was discovered in
//! - **DocumentType**: Closed classification of the source document
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Extraction, validation and drafting live in other crates
//! - A record is created per extraction call and has no identity across calls

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document_type;
pub mod party;
pub mod record;

// Re-exports for convenience
pub use document_type::DocumentType;
pub use party::{Party, PartyRole};
pub use record::ResolutionRecord;
