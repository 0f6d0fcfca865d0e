//! Document classification

use std::fmt;

/// Classification of a governance document
///
/// The set is closed: classification always lands on one of these four,
/// starting from [`DocumentType::Generic`] when no keyword is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentType {
    /// Neither articles nor memorandum detected
    #[default]
    Generic,

    /// Articles of Association
    Articles,

    /// Memorandum of Association
    Memorandum,

    /// Both articles and memorandum detected
    ArticlesAndMemorandum,
}

impl DocumentType {
    /// Get the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Generic => "AOA/MOA",
            DocumentType::Articles => "Articles of Association",
            DocumentType::Memorandum => "Memorandum of Association",
            DocumentType::ArticlesAndMemorandum => "Articles + Memorandum of Association",
        }
    }

    /// Combine two classification signals
    ///
    /// Used when independent keyword checks each contribute a type.
    pub fn combine(self, other: DocumentType) -> DocumentType {
        use DocumentType::*;
        match (self, other) {
            (Generic, t) | (t, Generic) => t,
            (Articles, Memorandum) | (Memorandum, Articles) => ArticlesAndMemorandum,
            (ArticlesAndMemorandum, _) | (_, ArticlesAndMemorandum) => ArticlesAndMemorandum,
            (t, _) => t,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
