//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::event::{EventIssue, EventLabel, EventOwner, EventRepository, EventUser};
use crate::domain::entities::{ExternalIssueEvent, MirroredIssueRecord, RepoCoordinate};

/// Canonical URL of the issue in `test_event`
pub const SOURCE_URL: &str = "https://api.github.com/repos/widgets-org/widgets/issues/12";

/// The internal repository mirrors are created in
pub fn internal_repo() -> RepoCoordinate {
    RepoCoordinate::new("acme", "bounty-triage")
}

/// A bounty event: "Heap overflow" by alice, labelled `All For One` and `bug`
pub fn test_event() -> ExternalIssueEvent {
    test_event_with_labels(&["All For One", "bug"])
}

/// `test_event` with a specific label set
pub fn test_event_with_labels(labels: &[&str]) -> ExternalIssueEvent {
    ExternalIssueEvent {
        action: Some("labeled".to_string()),
        issue: Some(EventIssue {
            id: Some(9001),
            number: Some(12),
            title: Some("Heap overflow".to_string()),
            body: Some("details".to_string()),
            url: Some(SOURCE_URL.to_string()),
            user: Some(EventUser {
                login: "alice".to_string(),
                url: Some("https://api.github.com/users/alice".to_string()),
            }),
            labels: labels
                .iter()
                .map(|name| EventLabel {
                    name: name.to_string(),
                })
                .collect(),
        }),
        repository: Some(EventRepository {
            name: "widgets".to_string(),
            owner: EventOwner {
                login: "widgets-org".to_string(),
            },
        }),
    }
}

/// A fresh bounty event for another issue by the same submitter
pub fn test_event_for_issue(number: i64, author: &str) -> ExternalIssueEvent {
    let mut event = test_event();
    if let Some(issue) = event.issue.as_mut() {
        issue.number = Some(number);
        issue.url = Some(format!(
            "https://api.github.com/repos/widgets-org/widgets/issues/{}",
            number
        ));
        issue.user = Some(EventUser {
            login: author.to_string(),
            url: Some(format!("https://api.github.com/users/{}", author)),
        });
    }
    event
}

/// An existing issue in a tracker listing
pub fn mirror_record(number: u64, body: &str, author: &str) -> MirroredIssueRecord {
    MirroredIssueRecord {
        number,
        title: format!("Mirror #{}", number),
        body: body.to_string(),
        author: Some(author.to_string()),
    }
}
