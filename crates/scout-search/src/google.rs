use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::{shape_search_items, SearchError, SearchIndex, SearchResultItem};

/// Field projection requested from the index; shaping discards anything else anyway.
const SEARCH_FIELD_PROJECTION: &str = "items(title,link,snippet)";
/// Largest page size the custom search API accepts.
const MAX_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone)]
/// Connection settings for the Google Custom Search JSON API.
pub struct GoogleSearchConfig {
    pub api_base: String,
    pub api_key: String,
    pub engine_id: String,
    pub request_timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
struct GoogleSearchResponse {
    #[serde(default)]
    items: Vec<Value>,
}

#[derive(Clone)]
pub struct GoogleSearchClient {
    http: reqwest::Client,
    config: GoogleSearchConfig,
}

impl GoogleSearchClient {
    pub fn new(config: GoogleSearchConfig) -> Result<Self, SearchError> {
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
            config: GoogleSearchConfig {
                api_base: config.api_base.trim_end_matches('/').to_string(),
                ..config
            },
        })
    }
}

#[async_trait]
impl SearchIndex for GoogleSearchClient {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResultItem>, SearchError> {
        if self.config.api_key.trim().is_empty() {
            return Err(SearchError::MissingCredential("api key"));
        }
        if self.config.engine_id.trim().is_empty() {
            return Err(SearchError::MissingCredential("search engine id"));
        }

        let page_size = max_results.clamp(1, MAX_PAGE_SIZE).to_string();
        let response = self
            .http
            .get(&self.config.api_base)
            .query(&[
                ("key", self.config.api_key.trim()),
                ("cx", self.config.engine_id.trim()),
                ("q", query),
                ("num", page_size.as_str()),
                ("fields", SEARCH_FIELD_PROJECTION),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response
            .json::<GoogleSearchResponse>()
            .await
            .map_err(|error| SearchError::InvalidResponse(error.to_string()))?;
        Ok(shape_search_items(&parsed.items, max_results))
    }
}
