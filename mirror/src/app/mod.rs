//! Application layer
//!
//! The replication pipeline: pure decision steps (classifier, duplicate and
//! first-submission detection) and the services that act on the tracker.

pub mod classifier;
pub mod duplicates;
pub mod first_submission;
pub mod mirror_creator;
pub mod mirror_service;
pub mod notifier;
pub mod templates;

pub use mirror_service::{MirrorService, RunContext};
