//! Mirror service
//!
//! Runs one incoming event through the pipeline:
//! classify -> check duplicates -> create mirror -> acknowledge.
//!
//! Each step reports a result; the service decides whether to continue and
//! nothing it sees escapes as an error. Deduplication is check-then-act
//! against the tracker with no locking, so two near-simultaneous runs for the
//! same issue can both create a mirror.

use std::sync::Arc;

use crate::app::classifier::{classify, Classification};
use crate::app::duplicates::{find_duplicate, DuplicateCheck};
use crate::app::mirror_creator::MirrorCreator;
use crate::app::notifier::AckNotifier;
use crate::domain::entities::{CreatedIssue, ExternalIssueEvent, RepoCoordinate};
use crate::domain::ports::IssueTracker;
use crate::error::{EventError, MirrorError};

/// Everything a single run needs, resolved once at startup
#[derive(Clone, Default)]
pub struct RunContext {
    pub event: ExternalIssueEvent,
    /// Credential for the internal tracker
    pub mirror_token: Option<String>,
    /// Credential for the original repository
    pub source_token: Option<String>,
    /// The caller already determined whether the issue exists; skips the
    /// duplicate check and the acknowledgement
    pub issue_exists: bool,
}

/// How a run ended
#[derive(Debug)]
pub enum RunOutcome {
    Invalid(EventError),
    NotBounty,
    Duplicate(u64),
    DuplicateUnverifiable,
    NotCreated(MirrorError),
    Mirrored {
        issue: CreatedIssue,
        acknowledged: bool,
    },
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunOutcome::Invalid(e) => write!(f, "skipped: {}", e),
            RunOutcome::NotBounty => write!(f, "skipped: not a bounty submission"),
            RunOutcome::Duplicate(n) => write!(f, "skipped: already mirrored as #{}", n),
            RunOutcome::DuplicateUnverifiable => {
                write!(f, "skipped: could not verify the issue is not already mirrored")
            }
            RunOutcome::NotCreated(e) => write!(f, "not mirrored: {}", e),
            RunOutcome::Mirrored {
                issue,
                acknowledged,
            } => write!(
                f,
                "mirrored as #{} ({}){}",
                issue.number,
                issue.url,
                if *acknowledged { ", acknowledged" } else { "" }
            ),
        }
    }
}

/// Service sequencing the mirror pipeline for one event
pub struct MirrorService<T>
where
    T: IssueTracker,
{
    tracker: Arc<T>,
    repo: RepoCoordinate,
    creator: MirrorCreator<T>,
    notifier: AckNotifier<T>,
}

impl<T> MirrorService<T>
where
    T: IssueTracker,
{
    pub fn new(tracker: Arc<T>, repo: RepoCoordinate) -> Self {
        Self {
            creator: MirrorCreator::new(tracker.clone(), repo.clone()),
            notifier: AckNotifier::new(tracker.clone()),
            tracker,
            repo,
        }
    }

    pub async fn run(&self, ctx: &RunContext) -> RunOutcome {
        let draft = match classify(&ctx.event) {
            Classification::Bounty(draft) => draft,
            Classification::Invalid(e) => {
                tracing::info!(reason = %e, "Ignoring event");
                return RunOutcome::Invalid(e);
            }
            Classification::NotBounty => {
                tracing::info!("Ignoring event without a bounty label");
                return RunOutcome::NotBounty;
            }
        };

        tracing::info!(
            category = %draft.category,
            source_url = %draft.source_url,
            submitter = %draft.submitter,
            "Bounty submission received"
        );

        if !ctx.issue_exists {
            match self
                .check_duplicates(&draft.source_url, ctx.mirror_token.as_deref())
                .await
            {
                DuplicateCheck::Unique => {}
                DuplicateCheck::Duplicate(number) => {
                    tracing::info!(number, source_url = %draft.source_url, "Already mirrored");
                    return RunOutcome::Duplicate(number);
                }
                DuplicateCheck::Unverifiable => {
                    tracing::warn!(
                        source_url = %draft.source_url,
                        "Cannot rule out an existing mirror, skipping"
                    );
                    return RunOutcome::DuplicateUnverifiable;
                }
            }
        }

        let issue = match self
            .creator
            .create_mirror(&draft, ctx.mirror_token.as_deref())
            .await
        {
            Ok(issue) => issue,
            Err(e) => return RunOutcome::NotCreated(e),
        };

        // Acknowledgement only follows a run that performed the duplicate check
        let acknowledged = if ctx.issue_exists {
            false
        } else {
            self.notifier
                .notify_original(&ctx.event, &issue, ctx.source_token.as_deref())
                .await
                .is_ok()
        };

        RunOutcome::Mirrored {
            issue,
            acknowledged,
        }
    }

    async fn check_duplicates(&self, source_url: &str, token: Option<&str>) -> DuplicateCheck {
        let mirrors = match self
            .tracker
            .list_issues(&self.repo.owner, &self.repo.name, token, true)
            .await
        {
            Ok(records) => Some(records),
            Err(e) => {
                tracing::warn!(error = %e, repo = %self.repo, "Failed to list existing mirrors");
                None
            }
        };

        find_duplicate(source_url, mirrors.as_deref())
    }
}
