use std::env;
use std::path::PathBuf;

use crate::adapters::DEFAULT_API_BASE;
use crate::domain::entities::RepoCoordinate;
use crate::error::ConfigError;

#[derive(Clone)]
pub struct Config {
    /// Repository mirrors are created in
    pub internal_repo: RepoCoordinate,
    /// Caller already determined issue existence (skips duplicate check and acknowledgement)
    pub issue_exists: bool,
    /// Credential for the internal tracker
    pub mirror_token: Option<String>,
    /// Credential for the original repository
    pub source_token: Option<String>,
    pub api_base_url: String,
    /// Where the event payload is read from
    pub event_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let internal_repo: RepoCoordinate = lookup("MIRROR_REPOSITORY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("MIRROR_REPOSITORY"))?
            .parse()?;

        Ok(Self {
            internal_repo,
            issue_exists: lookup("MIRROR_ISSUE_EXISTS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            mirror_token: non_empty(lookup("MIRROR_TOKEN")),
            source_token: non_empty(lookup("SOURCE_TOKEN")),
            api_base_url: non_empty(lookup("GITHUB_API_URL"))
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            event_path: non_empty(lookup("GITHUB_EVENT_PATH")).map(PathBuf::from),
        })
    }
}

/// Boolean-like flag: `1`, `true`, `yes`, `on` (any case)
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
