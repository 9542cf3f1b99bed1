//! Jira Cloud REST client used for issue search and comment listing.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::tracker_types::{RawCommentPage, RawSearchResponse};
use crate::{IssueComment, IssueTracker, JiraError, TrackerIssue};

const ISSUE_FIELD_PROJECTION: &str = "summary,status,assignee";

#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub api_token: String,
    pub request_timeout_ms: u64,
}

#[derive(Clone)]
pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Result<Self, JiraError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.request_timeout_ms.max(1)))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            api_token: config.api_token.trim().to_string(),
        })
    }

    /// The configured token is sent as `Basic <token>` without base64-encoding a
    /// `user:token` pair. Deployments must configure an already-encoded value.
    fn authorization_header(&self) -> String {
        format!("Basic {}", self.api_token)
    }

    fn ensure_configured(&self) -> Result<(), JiraError> {
        if self.base_url.is_empty() {
            return Err(JiraError::MissingCredential("base url"));
        }
        if self.api_token.is_empty() {
            return Err(JiraError::MissingCredential("api token"));
        }
        Ok(())
    }

    /// `{base}/rest/api/3/issue/{key}/comment`, with the key pushed as one
    /// percent-encoded path segment.
    fn comments_url(&self, issue_key: &str) -> Result<reqwest::Url, JiraError> {
        let mut url = reqwest::Url::parse(&format!("{}/rest/api/3/issue", self.base_url))
            .map_err(|error| JiraError::InvalidBaseUrl(format!("{}: {error}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| JiraError::InvalidBaseUrl(self.base_url.clone()))?
            .push(issue_key.trim())
            .push("comment");
        Ok(url)
    }

    async fn request_json<T>(
        &self,
        operation: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, JiraError>
    where
        T: DeserializeOwned,
    {
        let response = request
            .header(reqwest::header::AUTHORIZATION, self.authorization_header())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(JiraError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|error| JiraError::InvalidResponse(format!("{operation}: {error}")))
    }
}

#[async_trait]
impl IssueTracker for JiraClient {
    async fn search_issues(
        &self,
        jql: &str,
        max_results: usize,
    ) -> Result<Vec<TrackerIssue>, JiraError> {
        self.ensure_configured()?;
        let max_results_value = max_results.to_string();
        let request = self
            .http
            .get(format!("{}/rest/api/3/search", self.base_url))
            .query(&[
                ("jql", jql),
                ("maxResults", max_results_value.as_str()),
                ("fields", ISSUE_FIELD_PROJECTION),
            ]);
        let page: RawSearchResponse = self.request_json("issue search", request).await?;
        Ok(page
            .issues
            .into_iter()
            .take(max_results)
            .map(|issue| TrackerIssue::from_raw(&self.base_url, issue))
            .collect())
    }

    async fn list_comments(&self, issue_key: &str) -> Result<Vec<IssueComment>, JiraError> {
        self.ensure_configured()?;
        let request = self.http.get(self.comments_url(issue_key)?);
        let page: RawCommentPage = self.request_json("comment listing", request).await?;
        Ok(page
            .comments
            .into_iter()
            .map(IssueComment::from_raw)
            .collect())
    }
}
