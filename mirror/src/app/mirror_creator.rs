//! Mirror creator
//!
//! Opens the internal issue for a bounty draft and attaches the review
//! workflow comments:
//! 1. Task checklist
//! 2. Scoring rubric
//! 3. First-submission banner (only for submitters never mirrored before)
//!
//! Nothing is rolled back. If a comment fails after the issue exists, the
//! issue stays and the failure is reported.

use std::sync::Arc;

use crate::app::first_submission::is_first_submission;
use crate::app::templates::{FIRST_SUBMISSION_COMMENT, SCORING_COMMENT, TASK_LIST_COMMENT};
use crate::domain::entities::{CreatedIssue, IssueDraft, RepoCoordinate};
use crate::domain::ports::IssueTracker;
use crate::error::MirrorError;

/// Creates mirrors in the internal repository
pub struct MirrorCreator<T>
where
    T: IssueTracker,
{
    tracker: Arc<T>,
    repo: RepoCoordinate,
}

impl<T> MirrorCreator<T>
where
    T: IssueTracker,
{
    pub fn new(tracker: Arc<T>, repo: RepoCoordinate) -> Self {
        Self { tracker, repo }
    }

    /// Create the mirror for `draft` using the internal tracker credential
    ///
    /// A missing credential is a silent no-op that reports
    /// `MirrorError::MissingCredential`.
    pub async fn create_mirror(
        &self,
        draft: &IssueDraft,
        token: Option<&str>,
    ) -> Result<CreatedIssue, MirrorError> {
        let Some(token) = token else {
            tracing::debug!(
                repo = %self.repo,
                "No internal tracker credential, skipping mirror creation"
            );
            return Err(MirrorError::MissingCredential);
        };

        // Must be decided before the new mirror shows up in the listing
        let first = self.is_first_submission(&draft.submitter, token).await;

        let issue = self
            .tracker
            .create_issue(
                &self.repo.owner,
                &self.repo.name,
                token,
                &draft.title,
                &draft.body,
                &draft.labels,
            )
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    repo = %self.repo,
                    source_url = %draft.source_url,
                    "Failed to create mirror issue"
                );
                MirrorError::CreateIssue(e)
            })?;

        tracing::info!(
            number = issue.number,
            url = %issue.url,
            source_url = %draft.source_url,
            "Created mirror issue"
        );

        self.attach(&issue, token, "task list", TASK_LIST_COMMENT).await?;
        self.attach(&issue, token, "scoring", SCORING_COMMENT).await?;
        if first {
            self.attach(&issue, token, "first submission", FIRST_SUBMISSION_COMMENT)
                .await?;
        }

        Ok(issue)
    }

    async fn is_first_submission(&self, submitter: &str, token: &str) -> bool {
        let submissions = match self
            .tracker
            .list_issues(&self.repo.owner, &self.repo.name, Some(token), true)
            .await
        {
            Ok(records) => Some(records),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    repo = %self.repo,
                    "Could not list prior submissions, assuming first submission"
                );
                None
            }
        };

        is_first_submission(Some(submitter), submissions.as_deref())
    }

    async fn attach(
        &self,
        issue: &CreatedIssue,
        token: &str,
        comment: &'static str,
        body: &str,
    ) -> Result<(), MirrorError> {
        match self
            .tracker
            .create_comment(&self.repo.owner, &self.repo.name, issue.number, token, body)
            .await
        {
            Ok(c) => {
                tracing::debug!(
                    number = issue.number,
                    comment,
                    url = %c.url,
                    "Attached workflow comment"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    number = issue.number,
                    comment,
                    "Failed to attach workflow comment"
                );
                Err(MirrorError::AttachComment {
                    number: issue.number,
                    comment,
                    source: e,
                })
            }
        }
    }
}
