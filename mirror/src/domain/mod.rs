//! Domain layer
//!
//! Contains pure data models with no external dependencies.
//! - `entities`: Domain models for events, drafts and mirrored issues
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
