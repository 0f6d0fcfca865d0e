//! Line-oriented extractors: share capital, directors, objectives, clauses

use crate::patterns::{meaningful_value, DIRECTOR, KEY_CLAUSE, OBJECTS, SHARE_CAPITAL};
use regex::Regex;

/// First share/authorised capital statement with alphanumeric content
pub fn share_capital(text: &str) -> String {
    SHARE_CAPITAL
        .captures_iter(text)
        .filter_map(|caps| caps.get(2))
        .find_map(|value| meaningful_value(value.as_str()))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Remainder of every director line, in order, duplicates kept
pub fn directors(text: &str) -> Vec<String> {
    collect_remainders(&DIRECTOR, text)
}

/// Remainder of every line opening with objects/objectives/main objects
pub fn objectives(text: &str) -> Vec<String> {
    collect_remainders(&OBJECTS, text)
}

/// Every article/clause/section line, verbatim and in order
pub fn key_clauses(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| KEY_CLAUSE.is_match(line))
        .map(str::to_string)
        .collect()
}

fn collect_remainders(pattern: &Regex, text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let caps = pattern.captures(line.trim())?;
            meaningful_value(caps.get(2)?.as_str()).map(str::to_string)
        })
        .collect()
}
