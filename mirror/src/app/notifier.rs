//! Acknowledgement notifier
//!
//! Tells the submitter, on their original issue, that it has been mirrored.

use std::sync::Arc;

use crate::app::templates::acknowledgement;
use crate::domain::entities::{CreatedComment, CreatedIssue, ExternalIssueEvent};
use crate::domain::ports::IssueTracker;
use crate::error::AckError;

pub struct AckNotifier<T>
where
    T: IssueTracker,
{
    tracker: Arc<T>,
}

impl<T> AckNotifier<T>
where
    T: IssueTracker,
{
    pub fn new(tracker: Arc<T>) -> Self {
        Self { tracker }
    }

    /// Post one comment on the original issue referencing the mirror
    ///
    /// Every failure is logged here; callers only inspect the result.
    pub async fn notify_original(
        &self,
        event: &ExternalIssueEvent,
        mirror: &CreatedIssue,
        token: Option<&str>,
    ) -> Result<CreatedComment, AckError> {
        let Some(token) = token else {
            tracing::debug!("No source repository credential, skipping acknowledgement");
            return Err(AckError::MissingCredential);
        };
        let Some((owner, repo, number)) = event.origin() else {
            tracing::debug!("Event has no commentable origin, skipping acknowledgement");
            return Err(AckError::InvalidTarget);
        };

        match self
            .tracker
            .create_comment(owner, repo, number, token, &acknowledgement(mirror.number))
            .await
        {
            Ok(comment) => {
                tracing::info!(
                    owner = %owner,
                    repo = %repo,
                    number,
                    url = %comment.url,
                    "Acknowledged original issue"
                );
                Ok(comment)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    owner = %owner,
                    repo = %repo,
                    number,
                    "Failed to acknowledge original issue"
                );
                Err(AckError::Tracker(e))
            }
        }
    }
}
