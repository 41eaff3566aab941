//! Domain entities
//!
//! Pure domain models for incoming events and mirrored issues.

pub mod bounty;
pub mod event;
pub mod issue;
pub mod repository;

pub use bounty::BountyLabel;
pub use event::ExternalIssueEvent;
pub use issue::{CreatedComment, CreatedIssue, IssueDraft, MirroredIssueRecord};
pub use repository::RepoCoordinate;
