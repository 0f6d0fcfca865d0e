//! Legal authority suggestions

/// Reference returned for memorandum documents
pub const MEMORANDUM_AUTHORITY: &str =
    "Companies Act - Memorandum clauses (objects, liability, capital).";

/// Reference returned for articles documents
pub const ARTICLES_AUTHORITY: &str =
    "Companies Act - Articles provisions (governance and internal rules).";

/// Reference returned when the type names neither document
pub const GENERAL_AUTHORITY: &str = "Companies Act - General corporate governance provisions.";

/// Map a document type label to legal authority references
///
/// Takes the label rather than [`scrivener_domain::DocumentType`] so labels
/// from outside the closed set still get the general reference.
pub fn suggest_authorities(document_type: &str) -> Vec<String> {
    let lower = document_type.to_lowercase();
    let mut authorities = Vec::new();

    if lower.contains("memorandum") {
        authorities.push(MEMORANDUM_AUTHORITY.to_string());
    }
    if lower.contains("articles") {
        authorities.push(ARTICLES_AUTHORITY.to_string());
    }
    if authorities.is_empty() {
        authorities.push(GENERAL_AUTHORITY.to_string());
    }

    authorities
}
