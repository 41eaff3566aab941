//! Bounty classifier
//!
//! Decides whether an incoming issue event is a bounty submission and, if so,
//! builds the draft of the internal mirror.

use crate::app::templates::{attribution_line, source_line};
use crate::domain::entities::{BountyLabel, ExternalIssueEvent, IssueDraft};
use crate::error::EventError;

/// Outcome of classifying one event
#[derive(Debug)]
pub enum Classification {
    /// A bounty submission, ready to mirror
    Bounty(IssueDraft),
    /// The event lacks something the pipeline needs
    Invalid(EventError),
    /// A well-formed issue that carries no bounty label
    NotBounty,
}

/// Classify an event. Pure function of its input.
pub fn classify(event: &ExternalIssueEvent) -> Classification {
    let Some(issue) = event.issue.as_ref() else {
        return Classification::Invalid(EventError::MissingIssue);
    };
    let Some(submitter) = event.submitter() else {
        return Classification::Invalid(EventError::MissingAuthor);
    };
    let Some(url) = issue.url.as_deref().filter(|u| !u.is_empty()) else {
        return Classification::Invalid(EventError::MissingUrl);
    };
    let title = issue.title.as_deref().unwrap_or("");
    let profile_url = issue
        .user
        .as_ref()
        .and_then(|u| u.url.as_deref())
        .filter(|u| !u.is_empty());

    let mut labels = Vec::with_capacity(issue.labels.len());
    let mut category = None;
    for label in &issue.labels {
        labels.push(label.name.clone());
        // First match wins
        if category.is_none() {
            category = BountyLabel::from_name(&label.name);
        }
    }

    let Some(category) = category else {
        return Classification::NotBounty;
    };

    let body = format!(
        "{}\n{}\n\n{}",
        source_line(url),
        attribution_line(submitter, profile_url),
        issue.body.as_deref().unwrap_or("")
    );

    Classification::Bounty(IssueDraft {
        category,
        title: format!("[{}] {}", category, title),
        body,
        labels,
        source_url: url.to_string(),
        submitter: submitter.to_string(),
    })
}
