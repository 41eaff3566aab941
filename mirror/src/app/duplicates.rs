//! Duplicate detection
//!
//! A mirror is correlated with its original issue only through the original
//! URL embedded in the mirror body. There is no separate key.

use crate::domain::entities::MirroredIssueRecord;

/// Result of checking for an existing mirror
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateCheck {
    /// No existing mirror references the URL
    Unique,
    /// An existing mirror references the URL
    Duplicate(u64),
    /// The mirror listing could not be retrieved
    Unverifiable,
}

/// Find the first existing mirror whose body contains `target_url`
///
/// `None` for `mirrors` means the listing was unavailable, which is distinct
/// from an empty listing.
pub fn find_duplicate(target_url: &str, mirrors: Option<&[MirroredIssueRecord]>) -> DuplicateCheck {
    let Some(mirrors) = mirrors else {
        return DuplicateCheck::Unverifiable;
    };
    if target_url.is_empty() {
        return DuplicateCheck::Unverifiable;
    }

    mirrors
        .iter()
        .find(|m| m.body.contains(target_url))
        .map_or(DuplicateCheck::Unique, |m| DuplicateCheck::Duplicate(m.number))
}
