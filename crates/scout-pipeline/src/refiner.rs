use std::sync::Arc;

use scout_ai::{ChatRequest, LlmClient, Message};
use serde_json::json;
use tracing::Level;

use crate::{PipelineLogger, Query, COMPLETION_TEMPERATURE};

const REFINER_PERSONA: &str =
    "You are an assistant that rewrites a user's natural-language question into concise search keywords.";

fn refinement_prompt(text: &str) -> String {
    format!("Rewrite what the user said into core keywords suitable for a search: \"{text}\"")
}

/// Rewrites free text into search keywords, degrading to the raw text on any failure.
#[derive(Clone)]
pub struct QueryRefiner {
    llm: Arc<dyn LlmClient>,
    model: String,
    logger: Arc<dyn PipelineLogger>,
}

impl QueryRefiner {
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

    /// Never fails. On error the query comes back without `refined_text`, so
    /// [`Query::search_text`] yields the raw input unchanged.
    pub async fn refine(&self, query: Query) -> Query {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message::system(REFINER_PERSONA),
                Message::user(refinement_prompt(query.raw_text())),
            ],
            max_tokens: None,
            temperature: Some(COMPLETION_TEMPERATURE),
        };

        let failure = match self.llm.complete(request).await {
            Ok(response) => {
                let refined = response.message.text_content().trim();
                if !refined.is_empty() {
                    return query.with_refined(refined.to_string());
                }
                "completion returned empty text".to_string()
            }
            Err(error) => error.to_string(),
        };

        self.logger.log(
            Level::WARN,
            "query refinement failed; using original text",
            json!({
                "component": "query_refiner",
                "error": failure,
                "raw_text": query.raw_text(),
            }),
        );
        query
    }
}
