//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CreatedComment, CreatedIssue, MirroredIssueRecord};
use crate::domain::ports::IssueTracker;
use crate::error::TrackerError;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// GitHub caps `per_page` at 100; a shorter page is the last one
const PAGE_SIZE: usize = 100;

/// Implementation of the GitHub REST client
pub struct GithubClientImpl {
    http: Client,
    base_url: String,
}

impl GithubClientImpl {
    pub fn new(base_url: &str) -> Result<Self, TrackerError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("bounty-mirror"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(t) => request.header(AUTHORIZATION, format!("Bearer {}", t.trim())),
            None => request,
        }
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, TrackerError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| TrackerError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(TrackerError::Unauthorized)
        } else if status.as_u16() == 429 || is_quota_exhausted(&response) {
            Err(TrackerError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(TrackerError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// GitHub reports primary rate limiting as 403 with no remaining quota
fn is_quota_exhausted(response: &reqwest::Response) -> bool {
    response.status().as_u16() == 403
        && response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            == Some("0")
}

fn state_filter(include_closed: bool) -> &'static str {
    if include_closed {
        "all"
    } else {
        "open"
    }
}

/// Request types for the GitHub API
#[derive(Serialize)]
struct CreateIssueRequest<'a> {
    title: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    labels: &'a [String],
}

#[derive(Serialize)]
struct CreateCommentRequest<'a> {
    body: &'a str,
}

/// Response types from the GitHub API
#[derive(Deserialize)]
struct GithubUserResponse {
    login: String,
}

#[derive(Deserialize)]
struct GithubIssueResponse {
    number: u64,
    title: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    user: Option<GithubUserResponse>,
    /// Present only when the "issue" is a pull request
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

impl From<GithubIssueResponse> for MirroredIssueRecord {
    fn from(r: GithubIssueResponse) -> Self {
        MirroredIssueRecord {
            number: r.number,
            title: r.title,
            body: r.body.unwrap_or_default(),
            author: r.user.map(|u| u.login),
        }
    }
}

#[derive(Deserialize)]
struct CreatedIssueResponse {
    number: u64,
    html_url: String,
}

impl From<CreatedIssueResponse> for CreatedIssue {
    fn from(r: CreatedIssueResponse) -> Self {
        CreatedIssue {
            number: r.number,
            url: r.html_url,
        }
    }
}

#[derive(Deserialize)]
struct CreatedCommentResponse {
    id: u64,
    html_url: String,
}

impl From<CreatedCommentResponse> for CreatedComment {
    fn from(r: CreatedCommentResponse) -> Self {
        CreatedComment {
            id: r.id,
            url: r.html_url,
        }
    }
}

/// Drop pull requests and convert the rest of a page
fn issues_only(page: Vec<GithubIssueResponse>) -> impl Iterator<Item = MirroredIssueRecord> {
    page.into_iter()
        .filter(|issue| issue.pull_request.is_none())
        .map(MirroredIssueRecord::from)
}

#[async_trait]
impl IssueTracker for GithubClientImpl {
    async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        token: Option<&str>,
        include_closed: bool,
    ) -> Result<Vec<MirroredIssueRecord>, TrackerError> {
        let url = self.api_url(&format!("/repos/{}/{}/issues", owner, repo));
        let per_page = PAGE_SIZE.to_string();
        let mut records = Vec::new();
        let mut page = 1_u32;

        loop {
            let page_value = page.to_string();
            let request = self.http.get(&url).query(&[
                ("state", state_filter(include_closed)),
                ("per_page", per_page.as_str()),
                ("page", page_value.as_str()),
            ]);

            let resp = Self::authorized(request, token).send().await?;
            let chunk: Vec<GithubIssueResponse> = self.handle_response(resp).await?;
            let chunk_len = chunk.len();
            records.extend(issues_only(chunk));

            if chunk_len < PAGE_SIZE {
                break;
            }
            page = page.saturating_add(1);
        }

        Ok(records)
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
        let request = self
            .http
            .post(self.api_url(&format!("/repos/{}/{}/issues", owner, repo)))
            .json(&CreateIssueRequest {
                title,
                body,
                labels,
            });

        let resp = Self::authorized(request, Some(token)).send().await?;
        let issue: CreatedIssueResponse = self.handle_response(resp).await?;
        Ok(issue.into())
    }

    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        token: &str,
        body: &str,
    ) -> Result<CreatedComment, TrackerError> {
        let request = self
            .http
            .post(self.api_url(&format!(
                "/repos/{}/{}/issues/{}/comments",
                owner, repo, number
            )))
            .json(&CreateCommentRequest { body });

        let resp = Self::authorized(request, Some(token)).send().await?;
        let comment: CreatedCommentResponse = self.handle_response(resp).await?;
        Ok(comment.into())
    }
}
