//! Parties named in a document

use std::fmt;

/// Role a party was discovered in
///
/// Roles are assigned by whichever extractor finds the party; there is no
/// global registry reconciling the same name across roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartyRole {
    /// Author of correspondence (`From:` line)
    Sender,

    /// Addressee of correspondence (`To:` line)
    Recipient,

    /// Member or shareholder of the company
    MemberShareholder,
}

impl PartyRole {
    /// Get the role label
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyRole::Sender => "Sender",
            PartyRole::Recipient => "Recipient",
            PartyRole::MemberShareholder => "Member/Shareholder",
        }
    }
}

impl fmt::Display for PartyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named party and the role it appears in
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Party {
    /// Name as it appears in the source (may be a full line)
    pub name: String,

    /// Role assigned by the discovering extractor
    pub role: PartyRole,
}

impl Party {
    /// Create a new party
    pub fn new(name: impl Into<String>, role: PartyRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}
