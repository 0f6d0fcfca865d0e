//! Company name detection

use crate::patterns::{COMPANY, TITLE_PREFIX};

/// Lone words that make "The Company" a reference rather than a name
const DETERMINERS: &[&str] = &["The", "This", "Such", "Said", "Each", "Any", "Our", "Your"];

/// Suffix words that can open a match of their own ("Private Limited")
const SUFFIX_WORDS: &[&str] = &[
    "Private", "Limited", "Company", "Corporation", "LLP", "Ltd", "Inc",
];

/// First capitalized name followed by a legal-entity suffix
///
/// A leading "Articles of Association of" style title is not part of the
/// name. Returns an empty string when no candidate is found.
pub fn company_name(text: &str) -> String {
    COMPANY
        .captures_iter(text)
        .find_map(|caps| {
            let full = caps.name("full")?.as_str();
            let name = caps.name("name")?.as_str();

            // name and full share a start, so the prefix length applies to both
            let prefix = TITLE_PREFIX.find(name).map_or(0, |m| m.end());
            let name = &name[prefix..];
            if name.is_empty() || DETERMINERS.contains(&name) || SUFFIX_WORDS.contains(&name) {
                return None;
            }
            Some(full[prefix..].to_string())
        })
        .unwrap_or_default()
}
