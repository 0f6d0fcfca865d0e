//! Field extractors
//!
//! Each extractor is a pure function over the normalized document text and
//! computes one record field. They share no state and can run in any order.

mod classify;
mod company;
mod dates;
mod lines;
mod office;
mod parties;

pub use classify::{
    classify_document, governance_notes, DIRECTOR_NOTE, MEETING_NOTE, QUORUM_NOTE,
};
pub use company::company_name;
pub use dates::key_dates;
pub use lines::{directors, key_clauses, objectives, share_capital};
pub use office::registered_office;
pub use parties::parties;
