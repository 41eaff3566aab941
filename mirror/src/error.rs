//! Error types for the bounty mirror
//!
//! This module defines error types for each layer:
//! - `TrackerError`: issue tracker (GitHub API) client errors
//! - `EventError`: malformed or incomplete incoming issue events
//! - `ConfigError`: startup configuration errors
//! - `MirrorError`: mirror creation failures
//! - `AckError`: acknowledgement failures on the original issue

use thiserror::Error;

/// Issue tracker client errors
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Reasons an incoming event cannot be used
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Malformed event payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Event has no issue")]
    MissingIssue,

    #[error("Issue has no author")]
    MissingAuthor,

    #[error("Issue has no canonical URL")]
    MissingUrl,
}

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid repository coordinate '{0}', expected owner/name")]
    InvalidRepository(String),
}

/// Mirror creation failures
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("No credential configured for the internal tracker")]
    MissingCredential,

    #[error("Failed to create internal issue: {0}")]
    CreateIssue(#[source] TrackerError),

    #[error("Failed to attach {comment} comment to internal issue #{number}: {source}")]
    AttachComment {
        number: u64,
        comment: &'static str,
        #[source]
        source: TrackerError,
    },
}

/// Acknowledgement failures on the original issue
#[derive(Debug, Error)]
pub enum AckError {
    #[error("No credential configured for the source repository")]
    MissingCredential,

    #[error("Event does not identify a commentable issue")]
    InvalidTarget,

    #[error("Failed to post acknowledgement: {0}")]
    Tracker(#[from] TrackerError),
}
