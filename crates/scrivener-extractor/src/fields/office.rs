//! Registered office extraction
//!
//! Two tiers. The line scan looks for a line that names the registered
//! office/address, is not a correspondence header, and carries evidence of an
//! actual address (trailing colon, the word "address", or a digit). The
//! address may continue on the following lines, up to a blank line, a
//! correspondence header, a closing line or an article heading. Only when no
//! such line exists does the single-line pattern (which also accepts
//! "principal office") apply.

use crate::patterns::{
    meaningful_value, CLOSING_LINE, HEADER_LINE, HEADING, OFFICE_INLINE, OFFICE_TRIGGER,
};
use tracing::debug;

/// Extract the registered office address
///
/// `max_continuation` bounds how many lines after the trigger line may be
/// appended. Returns an empty string when neither tier matches.
pub fn registered_office(text: &str, max_continuation: usize) -> String {
    if let Some(address) = scan_lines(text, max_continuation) {
        return address;
    }

    debug!("No registered office block found, trying inline pattern");
    OFFICE_INLINE
        .captures_iter(text)
        .filter_map(|caps| caps.get(2))
        .find_map(|value| meaningful_value(value.as_str()))
        .map(str::to_string)
        .unwrap_or_default()
}

fn scan_lines(text: &str, max_continuation: usize) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();

    for (idx, line) in lines.iter().enumerate() {
        let stripped = line.trim();
        if HEADER_LINE.is_match(stripped) {
            continue;
        }

        let lower = line.to_lowercase();
        if !(lower.contains("registered office") || lower.contains("registered address")) {
            continue;
        }

        let has_digits = line.chars().any(|c| c.is_ascii_digit());
        if !(stripped.ends_with(':') || lower.contains("address") || has_digits) {
            continue;
        }

        let remainder = OFFICE_TRIGGER.replace_all(line, "");
        let cleaned = remainder.trim_matches(|c: char| c == ' ' || c == ':' || c == '-');

        let mut parts: Vec<&str> = Vec::new();
        if !cleaned.is_empty() {
            parts.push(cleaned);
        }

        for next in lines.iter().skip(idx + 1).take(max_continuation) {
            let next = next.trim();
            // chunk normalization drops blank lines before headings, so stop there too
            if next.is_empty()
                || HEADER_LINE.is_match(next)
                || CLOSING_LINE.is_match(next)
                || HEADING.is_match(next)
            {
                break;
            }
            parts.push(next);
        }

        let address = parts
            .join(" ")
            .trim_matches(|c: char| c == ',' || c == ' ')
            .to_string();
        if !address.is_empty() {
            debug!("Registered office found on line {}", idx + 1);
            return Some(address);
        }
    }

    None
}
