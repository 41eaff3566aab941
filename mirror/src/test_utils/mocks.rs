//! Mock implementations of port traits
//!
//! In-memory tracker that can be configured for testing. It stores issues
//! per repository and records every call so tests can verify behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{CreatedComment, CreatedIssue, MirroredIssueRecord};
use crate::domain::ports::IssueTracker;
use crate::error::TrackerError;

/// Key for identifying a repository (owner, repo)
type RepoKey = (String, String);

/// A `list_issues` call
#[derive(Debug, Clone)]
pub struct RecordedListing {
    pub owner: String,
    pub repo: String,
    pub token: Option<String>,
    pub include_closed: bool,
}

/// A successful `create_issue` call
#[derive(Debug, Clone)]
pub struct RecordedIssue {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub token: String,
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// A successful `create_comment` call
#[derive(Debug, Clone)]
pub struct RecordedComment {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub token: String,
    pub body: String,
}

/// A mock issue tracker that tracks calls and returns configurable responses
#[derive(Default)]
pub struct MockIssueTracker {
    issues: Arc<RwLock<HashMap<RepoKey, Vec<MirroredIssueRecord>>>>,
    listings: Arc<RwLock<Vec<RecordedListing>>>,
    created_issues: Arc<RwLock<Vec<RecordedIssue>>>,
    comments: Arc<RwLock<Vec<RecordedComment>>>,
    fail_listing: bool,
    fail_issue_creation: bool,
    /// Comments whose body contains this text fail
    fail_comment_containing: Option<String>,
    /// Repos where every comment fails
    fail_comments_in: HashSet<RepoKey>,
}

impl MockIssueTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing issue
    pub fn with_issue(self, owner: &str, repo: &str, record: MirroredIssueRecord) -> Self {
        {
            let mut issues = self.issues.write().unwrap();
            issues
                .entry((owner.to_string(), repo.to_string()))
                .or_default()
                .push(record);
        }
        self
    }

    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub fn failing_issue_creation(mut self) -> Self {
        self.fail_issue_creation = true;
        self
    }

    pub fn failing_comment_containing(mut self, text: &str) -> Self {
        self.fail_comment_containing = Some(text.to_string());
        self
    }

    pub fn failing_comments_in(mut self, owner: &str, repo: &str) -> Self {
        self.fail_comments_in
            .insert((owner.to_string(), repo.to_string()));
        self
    }

    pub fn listings(&self) -> Vec<RecordedListing> {
        self.listings.read().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.listings.read().unwrap().len()
    }

    pub fn created_issues(&self) -> Vec<RecordedIssue> {
        self.created_issues.read().unwrap().clone()
    }

    pub fn comments(&self) -> Vec<RecordedComment> {
        self.comments.read().unwrap().clone()
    }

    /// Bodies of the comments on one issue, in posting order
    pub fn comment_bodies_on(&self, owner: &str, repo: &str, number: u64) -> Vec<String> {
        self.comments
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.owner == owner && c.repo == repo && c.number == number)
            .map(|c| c.body.clone())
            .collect()
    }

    fn failure() -> TrackerError {
        TrackerError::Api {
            status: 500,
            message: "Mock failure".to_string(),
        }
    }
}

#[async_trait]
impl IssueTracker for MockIssueTracker {
    async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        token: Option<&str>,
        include_closed: bool,
    ) -> Result<Vec<MirroredIssueRecord>, TrackerError> {
        self.listings.write().unwrap().push(RecordedListing {
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: token.map(|t| t.to_string()),
            include_closed,
        });

        if self.fail_listing {
            return Err(Self::failure());
        }

        Ok(self
            .issues
            .read()
            .unwrap()
            .get(&(owner.to_string(), repo.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        token: &str,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<CreatedIssue, TrackerError> {
        if self.fail_issue_creation {
            return Err(Self::failure());
        }

        let mut issues = self.issues.write().unwrap();
        let repo_issues = issues
            .entry((owner.to_string(), repo.to_string()))
            .or_default();
        let number = repo_issues.iter().map(|i| i.number).max().unwrap_or(0) + 1;
        repo_issues.push(MirroredIssueRecord {
            number,
            title: title.to_string(),
            body: body.to_string(),
            author: Some("mirror-bot".to_string()),
        });

        self.created_issues.write().unwrap().push(RecordedIssue {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
            token: token.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            labels: labels.to_vec(),
        });

        Ok(CreatedIssue {
            number,
            url: format!("https://github.com/{}/{}/issues/{}", owner, repo, number),
        })
    }

    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        token: &str,
        body: &str,
    ) -> Result<CreatedComment, TrackerError> {
        let in_failing_repo = self
            .fail_comments_in
            .contains(&(owner.to_string(), repo.to_string()));
        let matches_failing_text = self
            .fail_comment_containing
            .as_deref()
            .is_some_and(|text| body.contains(text));
        if in_failing_repo || matches_failing_text {
            return Err(Self::failure());
        }

        let mut comments = self.comments.write().unwrap();
        comments.push(RecordedComment {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
            token: token.to_string(),
            body: body.to_string(),
        });
        let id = comments.len() as u64;

        Ok(CreatedComment {
            id,
            url: format!(
                "https://github.com/{}/{}/issues/{}#issuecomment-{}",
                owner, repo, number, id
            ),
        })
    }
}
