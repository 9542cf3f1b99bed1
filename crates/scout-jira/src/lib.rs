//! Issue-tracker surface: JQL construction, issue/comment shapes, and the REST client.
mod jira_api_client;
mod jql;
mod tracker_types;

pub use jira_api_client::{JiraClient, JiraConfig};
pub use jql::{build_jql, FilterSet, JqlError};
pub use tracker_types::{IssueComment, TrackerIssue, UNASSIGNED_SENTINEL, UNKNOWN_SENTINEL};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
/// Enumerates supported `JiraError` values.
pub enum JiraError {
    #[error("missing tracker configuration: {0}")]
    MissingCredential(&'static str),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("tracker returned non-success status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("invalid tracker base url: {0}")]
    InvalidBaseUrl(String),
    #[error("invalid tracker response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
/// Trait contract for issue-tracker lookups.
pub trait IssueTracker: Send + Sync {
    /// Run a JQL search and return at most `max_results` issues in upstream order.
    async fn search_issues(
        &self,
        jql: &str,
        max_results: usize,
    ) -> Result<Vec<TrackerIssue>, JiraError>;

    /// List the comments of one issue in upstream order.
    async fn list_comments(&self, issue_key: &str) -> Result<Vec<IssueComment>, JiraError>;
}
