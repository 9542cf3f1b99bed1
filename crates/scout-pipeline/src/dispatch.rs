use std::sync::Arc;

use scout_jira::{build_jql, FilterSet, IssueTracker, TrackerIssue};
use scout_search::{truncate_results, SearchIndex, SearchResultItem};
use serde_json::json;
use tracing::Level;

use crate::{PipelineError, PipelineLogger};

/// Cap for results rendered into a chat reply.
pub const MENTION_RESULT_LIMIT: usize = 3;
/// Cap for results returned by the HTTP API.
pub const API_RESULT_LIMIT: usize = 5;

const NO_RESULTS_TEXT: &str = "No search results found.";

/// Render the chat reply for a mention-triggered search.
pub fn format_mention_reply(search_text: &str, items: &[SearchResultItem]) -> String {
    let listing = if items.is_empty() {
        NO_RESULTS_TEXT.to_string()
    } else {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| format!("{}. *{}*\n{}", index + 1, item.title, item.link))
            .collect::<Vec<_>>()
            .join("\n\n")
    };
    format!(":round_pushpin: *\"{search_text}\" search results:*\n\n{listing}")
}

/// Runs lookups against the search index and tracker, bounding results to the caller's cap.
#[derive(Clone)]
pub struct SearchDispatcher {
    index: Arc<dyn SearchIndex>,
    tracker: Arc<dyn IssueTracker>,
    logger: Arc<dyn PipelineLogger>,
}

impl SearchDispatcher {
    pub fn new(
        index: Arc<dyn SearchIndex>,
        tracker: Arc<dyn IssueTracker>,
        logger: Arc<dyn PipelineLogger>,
    ) -> Self {
        Self {
            index,
            tracker,
            logger,
        }
    }

    pub async fn search_web(
        &self,
        query: &str,
        cap: usize,
    ) -> Result<Vec<SearchResultItem>, PipelineError> {
        match self.index.search(query, cap).await {
            Ok(items) => Ok(truncate_results(items, cap)),
            Err(error) => {
                self.logger.log(
                    Level::ERROR,
                    "web search failed",
                    json!({"component": "search_dispatcher", "target": "web", "query": query, "error": error.to_string()}),
                );
                Err(PipelineError::upstream("failed to search the web index"))
            }
        }
    }

    /// Build JQL from `filters` and search the tracker. An empty filter set is a
    /// validation error and never reaches the tracker.
    pub async fn search_issues(
        &self,
        filters: &FilterSet,
        cap: usize,
    ) -> Result<Vec<TrackerIssue>, PipelineError> {
        let jql = build_jql(filters)?;
        match self.tracker.search_issues(&jql, cap).await {
            Ok(issues) => Ok(truncate_results(issues, cap)),
            Err(error) => {
                self.logger.log(
                    Level::ERROR,
                    "issue search failed",
                    json!({"component": "search_dispatcher", "target": "tracker", "jql": jql, "error": error.to_string()}),
                );
                Err(PipelineError::upstream("failed to search issues"))
            }
        }
    }
}
