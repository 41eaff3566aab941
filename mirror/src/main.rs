//! Bounty Mirror
//!
//! Mirrors externally reported bounty issues into an internal tracking
//! repository and attaches the review workflow comments. Handles exactly one
//! issue event per invocation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;

#[cfg(test)]
mod test_utils;


use adapters::GithubClientImpl;
use app::{MirrorService, RunContext};
use config::Config;
use domain::entities::ExternalIssueEvent;

/// Read the event payload from a file, or from stdin when no path is given
async fn read_payload(path: Option<PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read event payload from {}", path.display())),
        None => {
            let mut payload = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut payload)
                .await
                .context("Failed to read event payload from stdin")?;
            Ok(payload)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bounty_mirror=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Invalid configuration")?;
    let event_path = config
        .event_path
        .clone()
        .or_else(|| std::env::args_os().nth(1).map(PathBuf::from));

    tracing::info!(repo = %config.internal_repo, "Starting bounty mirror");

    let payload = read_payload(event_path).await?;
    let event = match ExternalIssueEvent::from_slice(&payload) {
        Ok(event) => event,
        Err(e) => {
            // Input rejection, not a failure of the run
            tracing::info!(reason = %e, "Ignoring event");
            return Ok(());
        }
    };

    let tracker = Arc::new(
        GithubClientImpl::new(&config.api_base_url).context("Failed to build GitHub client")?,
    );
    let service = MirrorService::new(tracker, config.internal_repo.clone());

    let ctx = RunContext {
        event,
        mirror_token: config.mirror_token.clone(),
        source_token: config.source_token.clone(),
        issue_exists: config.issue_exists,
    };

    let outcome = service.run(&ctx).await;
    tracing::info!(outcome = %outcome, "Run finished");

    Ok(())
}
