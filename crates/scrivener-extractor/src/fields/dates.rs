//! Key date collection

use crate::patterns::DATE;
use std::collections::BTreeSet;

/// Every `D Month YYYY` and `YYYY-MM-DD` token in the text
///
/// Tokens are kept as written and ordered as strings, not as calendar dates:
/// `"10 May 2020"` sorts before `"2 May 2020"`.
pub fn key_dates(text: &str) -> BTreeSet<String> {
    DATE.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
