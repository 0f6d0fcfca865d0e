//! Compiled text patterns shared by the chunker and field extractors

use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hardcoded regex pattern is valid")
}

/// Article/clause/section heading that opens a chunk
pub(crate) static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(article|clause|section)\s+\d+[A-Za-z0-9.\-:]*\b.*$")
});

/// Line recorded verbatim as a key clause
pub(crate) static KEY_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(article|clause|section)\s+\d+"));

/// `D Month YYYY` or `YYYY-MM-DD`
pub(crate) static DATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\b(\d{1,2}\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4}|\d{4}-\d{2}-\d{2})\b",
    )
});

/// Capitalized words followed by one or more legal-entity suffixes
///
/// A word is a capitalized token, a run of dotted initials (`A.B.C.`) or, after
/// the first word, a parenthesized token (`(India)`). `name` holds the words
/// before the first suffix, `full` the whole match.
pub(crate) static COMPANY: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"\b(?P<full>",
        r"(?P<name>(?:(?:[A-Z]\.)+|[A-Z][A-Za-z0-9&'\-]+)",
        r"(?:,?[ \t]+(?:(?:of|and|the|for|&)[ \t]+)*",
        r"(?:(?:[A-Z]\.)+|\([A-Z][A-Za-z]+\)|[A-Z][A-Za-z0-9&'\-]*))*?)",
        r"(?:,?[ \t]+(?:(?:Private Limited|Limited|LLP|Corporation|Company)\b|(?:Ltd|Inc)\b\.?))+",
        r")",
    ))
});

/// Document title words that precede the company name in a heading
pub(crate) static TITLE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"(?i)^(?:articles|memorandum)(?:[ \t]+(?:and|&)[ \t]+(?:articles|memorandum))?",
        r"[ \t]+of[ \t]+association[ \t]+of[ \t]+",
    ))
});

/// Correspondence header line (never an address)
pub(crate) static HEADER_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(email|from|to|subject|date)\b"));

/// Closing or instruction line that ends an address block
pub(crate) static CLOSING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(please|authorize|best|regards|noted|for the record)\b")
});

/// Everything up to and including the registered office trigger phrase
pub(crate) static OFFICE_TRIGGER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i).*registered (office|address)( is| to|:)?"));

/// Single-line registered office fallback
pub(crate) static OFFICE_INLINE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(registered office|registered address|principal office)[ \t]*[:\-][ \t]*(.+)")
});

/// Share capital statement
pub(crate) static SHARE_CAPITAL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(share capital|authorized capital|authorised capital)[ \t]*[:\-]?[ \t]*(.+)")
});

/// Director line
pub(crate) static DIRECTOR: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(board of directors|directors?)\b[ \t]*[:\-]?[ \t]*(.+)")
});

/// Objects clause line
pub(crate) static OBJECTS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(main objects|objectives|objects)\b[ \t]*[:\-]?[ \t]*(.+)$")
});

/// `From:` / `To:` correspondence line
pub(crate) static CORRESPONDENT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(from|to):\s*(.+)$"));

/// Trim the separators left around a captured value
fn clean_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == ':' || c == '-')
}

/// Cleaned value, or `None` when nothing alphanumeric is left
pub(crate) fn meaningful_value(value: &str) -> Option<&str> {
    let value = clean_value(value);
    value.chars().any(char::is_alphanumeric).then_some(value)
}
