//! Issue domain entities
//!
//! Issues live in the tracker (source of truth). These entities represent
//! the pipeline's view of mirrored issues and of the issue it is about to
//! create.

use super::BountyLabel;

/// An existing internal issue as returned by the directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirroredIssueRecord {
    pub number: u64,
    pub title: String,
    /// Expected to embed the original issue's URL
    pub body: String,
    pub author: Option<String>,
}

/// The normalized internal record to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    pub category: BountyLabel,
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
    /// URL of the original issue, embedded in `body`
    pub source_url: String,
    pub submitter: String,
}

/// Reference to an issue the tracker just created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    pub number: u64,
    pub url: String,
}

/// A comment the tracker just created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedComment {
    pub id: u64,
    pub url: String,
}
