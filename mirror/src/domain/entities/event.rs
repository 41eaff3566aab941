//! Incoming issue event
//!
//! Explicit schema for the issue-event payload delivered by the external
//! platform. Every field the pipeline consumes is typed here; anything else in
//! the payload is ignored.

use serde::{Deserialize, Deserializer};

use crate::error::EventError;

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// The raw incoming notification for one issue
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(dead_code)]
pub struct ExternalIssueEvent {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub issue: Option<EventIssue>,
    #[serde(default)]
    pub repository: Option<EventRepository>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[allow(dead_code)]
pub struct EventIssue {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    /// Canonical URL of the issue; the correlation key for mirrors
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user: Option<EventUser>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub labels: Vec<EventLabel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventUser {
    pub login: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventLabel {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepository {
    pub name: String,
    pub owner: EventOwner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventOwner {
    pub login: String,
}

impl ExternalIssueEvent {
    /// Parse a payload, rejecting anything that does not fit the schema
    pub fn from_slice(payload: &[u8]) -> Result<Self, EventError> {
        Ok(serde_json::from_slice(payload)?)
    }

    /// Login of the issue author, if the event names one
    pub fn submitter(&self) -> Option<&str> {
        self.issue
            .as_ref()
            .and_then(|i| i.user.as_ref())
            .map(|u| u.login.as_str())
            .filter(|login| !login.is_empty())
    }

    /// Owner, repository name and issue number of the original issue, when
    /// all three are present and the number is positive
    pub fn origin(&self) -> Option<(&str, &str, u64)> {
        let repo = self.repository.as_ref()?;
        let number = self.issue.as_ref()?.number?;
        if repo.owner.login.is_empty() || repo.name.is_empty() || number <= 0 {
            return None;
        }
        Some((repo.owner.login.as_str(), repo.name.as_str(), number as u64))
    }
}
