//! GitHub adapter
//!
//! Implementation of the issue tracker port against the GitHub REST API.

pub mod client;

pub use client::{GithubClientImpl, DEFAULT_API_BASE};
