//! Web search index client and the result shaping shared by every search surface.
mod google;
mod result_item;

pub use google::{GoogleSearchClient, GoogleSearchConfig};
pub use result_item::{shape_search_items, truncate_results, SearchResultItem};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
/// Enumerates supported `SearchError` values.
pub enum SearchError {
    #[error("missing search credential: {0}")]
    MissingCredential(&'static str),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("search index returned non-success status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("invalid search response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
/// Trait contract for keyword lookups against a search index.
pub trait SearchIndex: Send + Sync {
    /// Return at most `max_results` shaped items in upstream order.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResultItem>, SearchError>;
}
