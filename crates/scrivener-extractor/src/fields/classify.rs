//! Keyword classification: document type and governance notes

use scrivener_domain::DocumentType;

/// Note added when quorum is mentioned
pub const QUORUM_NOTE: &str = "Quorum requirements mentioned.";

/// Note added when directors are mentioned
pub const DIRECTOR_NOTE: &str = "Director appointment/removal provisions present.";

/// Note added when meetings are mentioned
pub const MEETING_NOTE: &str = "Meeting procedures referenced.";

/// Classify a document by keyword presence
///
/// The articles and memorandum checks both run; when both fire the result is
/// [`DocumentType::ArticlesAndMemorandum`].
pub fn classify_document(text: &str) -> DocumentType {
    let lower = text.to_lowercase();

    // "articles of association" / "memorandum of association" are covered by the bare words
    let articles = if lower.contains("articles") {
        DocumentType::Articles
    } else {
        DocumentType::Generic
    };
    let memorandum = if lower.contains("memorandum") {
        DocumentType::Memorandum
    } else {
        DocumentType::Generic
    };

    articles.combine(memorandum)
}

/// Fixed advisory notes for quorum, director and meeting mentions
pub fn governance_notes(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    [
        ("quorum", QUORUM_NOTE),
        ("director", DIRECTOR_NOTE),
        ("meeting", MEETING_NOTE),
    ]
    .iter()
    .filter(|(keyword, _)| lower.contains(*keyword))
    .map(|(_, note)| note.to_string())
    .collect()
}
