use std::sync::Arc;

use scout_ai::{ChatRequest, LlmClient, Message};
use serde_json::json;
use tracing::Level;

use crate::{PipelineError, PipelineLogger, COMPLETION_TEMPERATURE};

/// Most fragments submitted in one summarization call.
pub const SUMMARY_FRAGMENT_LIMIT: usize = 10;

const SUMMARIZER_PERSONA: &str =
    "You summarize issue-tracker discussion threads into a short, factual status update.";
const EMPTY_THREAD_SUMMARY: &str = "No comments to summarize.";

/// Render fragments as a 1-based numbered list, one per line.
fn numbered_list(fragments: &[String]) -> String {
    fragments
        .iter()
        .enumerate()
        .map(|(index, fragment)| format!("{}. {fragment}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Clone)]
pub struct Summarizer {
    llm: Arc<dyn LlmClient>,
    model: String,
    logger: Arc<dyn PipelineLogger>,
}

impl Summarizer {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        model: impl Into<String>,
        logger: Arc<dyn PipelineLogger>,
    ) -> Self {
        Self {
            llm,
            model: model.into(),
            logger,
        }
    }

    /// Summarize the first [`SUMMARY_FRAGMENT_LIMIT`] fragments. Completion failures
    /// propagate as `Upstream`; there is no fallback summary.
    pub async fn summarize(&self, fragments: &[String]) -> Result<String, PipelineError> {
        if fragments.is_empty() {
            return Ok(EMPTY_THREAD_SUMMARY.to_string());
        }
        let capped = &fragments[..fragments.len().min(SUMMARY_FRAGMENT_LIMIT)];
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message::system(SUMMARIZER_PERSONA),
                Message::user(format!(
                    "Summarize the following comments:\n{}",
                    numbered_list(capped)
                )),
            ],
            max_tokens: None,
            temperature: Some(COMPLETION_TEMPERATURE),
        };

        let response = self.llm.complete(request).await.map_err(|error| {
            self.logger.log(
                Level::ERROR,
                "summarization failed",
                json!({"component": "summarizer", "error": error.to_string()}),
            );
            PipelineError::upstream("failed to summarize comments")
        })?;

        let summary = response.message.text_content().trim();
        if summary.is_empty() {
            self.logger.log(
                Level::ERROR,
                "summarization returned empty text",
                json!({"component": "summarizer", "error": "empty completion"}),
            );
            return Err(PipelineError::upstream("failed to summarize comments"));
        }
        Ok(summary.to_string())
    }
}
