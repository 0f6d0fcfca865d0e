//! Party discovery

use crate::patterns::CORRESPONDENT;
use scrivener_domain::{Party, PartyRole};
use std::collections::HashSet;

/// Members/shareholders and correspondents named in the text
///
/// A line mentioning "member" or "shareholder" is taken whole as a
/// Member/Shareholder party. `From:` and `To:` lines give a Sender or
/// Recipient. A line can yield both. Exact `(name, role)` repeats are dropped.
pub fn parties(text: &str) -> Vec<Party> {
    let mut found = Vec::new();
    let mut seen: HashSet<(String, PartyRole)> = HashSet::new();

    let mut push = |name: &str, role: PartyRole| {
        if !name.is_empty() && seen.insert((name.to_string(), role)) {
            found.push(Party::new(name, role));
        }
    };

    for line in text.lines() {
        let stripped = line.trim();
        let lower = line.to_lowercase();

        if lower.contains("member") || lower.contains("shareholder") {
            push(stripped, PartyRole::MemberShareholder);
        }

        if let Some(caps) = CORRESPONDENT.captures(stripped) {
            let role = match caps.get(1).map(|m| m.as_str().to_lowercase()) {
                Some(keyword) if keyword == "from" => PartyRole::Sender,
                _ => PartyRole::Recipient,
            };
            if let Some(name) = caps.get(2) {
                push(name.as_str().trim(), role);
            }
        }
    }

    found
}
