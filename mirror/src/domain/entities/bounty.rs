//! Bounty labels
//!
//! The fixed set of label names that mark an issue as a bounty submission.

/// A bounty category, identified by its exact label name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BountyLabel {
    AllForOne,
    OneForAll,
}

impl BountyLabel {
    pub const ALL: [BountyLabel; 2] = [BountyLabel::AllForOne, BountyLabel::OneForAll];

    /// Label name as it appears on the issue
    pub fn as_str(&self) -> &'static str {
        match self {
            BountyLabel::AllForOne => "All For One",
            BountyLabel::OneForAll => "One For All",
        }
    }

    /// Exact, case-sensitive membership test
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.as_str() == name)
    }
}

impl std::fmt::Display for BountyLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
