//! Issue tracker port trait
//!
//! Defines the interface for listing, creating and commenting on issues.
//! Every call carries the credential it should use; the pipeline works with
//! two trackers' worth of tokens (internal mirror and original repository).

use async_trait::async_trait;

use crate::domain::entities::{CreatedComment, CreatedIssue, MirroredIssueRecord};
use crate::error::TrackerError;

/// Port trait for issue tracker operations
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// List issues in a repository (pull requests excluded)
    ///
    /// Without a token the listing is attempted anonymously. Open issues only
    /// unless `include_closed` is set.
    async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        token: Option<&str>,
        include_closed: bool,
    ) -> Result<Vec<MirroredIssueRecord>, TrackerError>;

    /// Create an issue
    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        token: &str,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<CreatedIssue, TrackerError>;

    /// Create a comment on an issue
    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        token: &str,
        body: &str,
    ) -> Result<CreatedComment, TrackerError>;
}
