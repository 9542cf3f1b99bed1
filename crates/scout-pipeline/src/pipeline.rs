use std::sync::Arc;

use anyhow::{Context, Result};
use scout_ai::{LlmClient, OpenAiClient};
use scout_jira::{FilterSet, IssueComment, IssueTracker, JiraClient, TrackerIssue};
use scout_search::{GoogleSearchClient, SearchIndex, SearchResultItem};
use scout_slack::{Notifier, SlackApiClient, SlackError, SlackMessenger, SlackPostAck};
use scout_text::{convert_markdown_to_mrkdwn, normalize_mention_text};
use serde::Deserialize;
use serde_json::json;
use tracing::Level;

use crate::{
    format_mention_reply, PipelineError, PipelineLogger, Query, QueryRefiner, ScoutConfig,
    SearchDispatcher, Summarizer, TriggerEvent, TriggerKind, API_RESULT_LIMIT,
    MENTION_RESULT_LIMIT,
};

/// Upstream capabilities a [`Pipeline`] is assembled from.
pub struct PipelineComponents {
    pub llm: Arc<dyn LlmClient>,
    pub index: Arc<dyn SearchIndex>,
    pub tracker: Arc<dyn IssueTracker>,
    pub messenger: Arc<dyn SlackMessenger>,
    pub model: String,
    pub logger: Arc<dyn PipelineLogger>,
}

/// Result of handling a trigger. Every variant except `Challenge` is acknowledged
/// to the trigger source with an empty success response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    Challenge(String),
    Ignored,
    Replied(SlackPostAck),
    Failed(PipelineError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageFormat {
    #[default]
    Plain,
    Markdown,
}

impl MessageFormat {
    fn parse(raw: Option<&str>) -> Result<Self, PipelineError> {
        match raw.map(str::trim) {
            None | Some("") | Some("plain") => Ok(Self::Plain),
            Some("markdown") => Ok(Self::Markdown),
            Some(other) => Err(PipelineError::validation(format!(
                "unsupported format '{other}'; expected plain or markdown"
            ))),
        }
    }
}

/// Body of a direct send request. Fields are optional so missing values surface as
/// validation errors rather than decode failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, PipelineError> {
    present(value, field).map(str::trim)
}

/// Like [`required`], but hands back the value untrimmed.
fn present<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, PipelineError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| PipelineError::validation(format!("{field} is required")))
}

#[derive(Clone)]
pub struct Pipeline {
    refiner: QueryRefiner,
    dispatcher: SearchDispatcher,
    summarizer: Summarizer,
    tracker: Arc<dyn IssueTracker>,
    notifier: Notifier,
    logger: Arc<dyn PipelineLogger>,
}

impl Pipeline {
    pub fn new(components: PipelineComponents) -> Self {
        let PipelineComponents {
            llm,
            index,
            tracker,
            messenger,
            model,
            logger,
        } = components;
        Self {
            refiner: QueryRefiner::new(llm.clone(), model.clone(), logger.clone()),
            summarizer: Summarizer::new(llm, model, logger.clone()),
            dispatcher: SearchDispatcher::new(index, tracker.clone(), logger.clone()),
            tracker,
            notifier: Notifier::new(messenger),
            logger,
        }
    }

    /// Build the production clients from `config`. Missing credentials are not
    /// rejected here; each client reports them when first used.
    pub fn from_config(config: &ScoutConfig, logger: Arc<dyn PipelineLogger>) -> Result<Self> {
        let llm = OpenAiClient::new(config.openai.clone())
            .context("failed to create completion client")?;
        let index = GoogleSearchClient::new(config.search.clone())
            .context("failed to create search index client")?;
        let tracker =
            JiraClient::new(config.jira.clone()).context("failed to create tracker client")?;
        let messenger = SlackApiClient::new(config.slack.clone())
            .context("failed to create messaging client")?;

        Ok(Self::new(PipelineComponents {
            llm: Arc::new(llm),
            index: Arc::new(index),
            tracker: Arc::new(tracker),
            messenger: Arc::new(messenger),
            model: config.model.clone(),
            logger,
        }))
    }

    /// Handle an inbound trigger. Failures are logged and folded into
    /// [`TriggerOutcome::Failed`]; this never returns an error.
    pub async fn handle_trigger_event(&self, event: &TriggerEvent) -> TriggerOutcome {
        if event.kind == TriggerKind::UrlVerification {
            return TriggerOutcome::Challenge(event.challenge_token.clone().unwrap_or_default());
        }

        let Some(query) = Query::new(normalize_mention_text(&event.raw_text)) else {
            self.logger.log(
                Level::DEBUG,
                "ignoring trigger with empty text",
                json!({"component": "trigger", "channel": event.channel_id}),
            );
            return TriggerOutcome::Ignored;
        };

        match self.search_and_reply(query, &event.channel_id).await {
            Ok(ack) => TriggerOutcome::Replied(ack),
            Err(error) => {
                self.logger.log(
                    Level::ERROR,
                    "trigger handling failed",
                    json!({"component": "trigger", "channel": event.channel_id, "error": error.to_string()}),
                );
                TriggerOutcome::Failed(error)
            }
        }
    }

    async fn search_and_reply(
        &self,
        query: Query,
        channel_id: &str,
    ) -> Result<SlackPostAck, PipelineError> {
        let query = self.refiner.refine(query).await;
        let items = self
            .dispatcher
            .search_web(query.search_text(), MENTION_RESULT_LIMIT)
            .await?;
        let reply = format_mention_reply(query.search_text(), &items);
        self.deliver(channel_id, &reply, None, true).await
    }

    pub async fn search_issues(
        &self,
        filters: &FilterSet,
    ) -> Result<Vec<TrackerIssue>, PipelineError> {
        self.dispatcher.search_issues(filters, API_RESULT_LIMIT).await
    }

    pub async fn issue_comments(
        &self,
        issue_key: Option<&str>,
    ) -> Result<Vec<IssueComment>, PipelineError> {
        let issue_key = required(issue_key, "key")?;
        self.fetch_comments(issue_key).await
    }

    async fn fetch_comments(&self, issue_key: &str) -> Result<Vec<IssueComment>, PipelineError> {
        self.tracker.list_comments(issue_key).await.map_err(|error| {
            self.logger.log(
                Level::ERROR,
                "comment fetch failed",
                json!({"component": "tracker", "issue_key": issue_key, "error": error.to_string()}),
            );
            PipelineError::upstream("failed to fetch comments")
        })
    }

    /// Fetch comments, summarize their plain text, and post the summary to `channel`.
    /// A post the platform rejects is an upstream failure.
    pub async fn summarize_issue_comments(
        &self,
        issue_key: Option<&str>,
        channel_id: Option<&str>,
    ) -> Result<SlackPostAck, PipelineError> {
        let issue_key = required(issue_key, "key")?;
        let channel_id = required(channel_id, "channel")?;

        let fragments = self
            .fetch_comments(issue_key)
            .await?
            .into_iter()
            .map(|comment| comment.body_plain_text)
            .collect::<Vec<_>>();
        let summary = self.summarizer.summarize(&fragments).await?;
        let text = format!("*{issue_key} comment summary*\n{summary}");
        let ack = self.deliver(channel_id, &text, None, true).await?;
        if !ack.ok {
            return Err(PipelineError::upstream("failed to post summary"));
        }
        Ok(ack)
    }

    pub async fn send_message(
        &self,
        request: &SendMessageRequest,
    ) -> Result<SlackPostAck, PipelineError> {
        let channel_id = required(request.channel.as_deref(), "channel")?;
        let message = present(request.message.as_deref(), "message")?;
        let format = MessageFormat::parse(request.format.as_deref())?;

        let (text, markup_enabled) = match format {
            MessageFormat::Plain => (message.to_string(), false),
            MessageFormat::Markdown => (convert_markdown_to_mrkdwn(message), true),
        };
        self.deliver(
            channel_id,
            &text,
            request.image_url.as_deref(),
            markup_enabled,
        )
        .await
    }

    pub async fn search_web(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<SearchResultItem>, PipelineError> {
        let query = required(query, "query")?;
        self.dispatcher.search_web(query, API_RESULT_LIMIT).await
    }

    async fn deliver(
        &self,
        channel_id: &str,
        text: &str,
        image_url: Option<&str>,
        markup_enabled: bool,
    ) -> Result<SlackPostAck, PipelineError> {
        let ack = self
            .notifier
            .notify(channel_id, text, image_url, markup_enabled)
            .await
            .map_err(|error| {
                self.logger.log(
                    Level::ERROR,
                    "message dispatch failed",
                    json!({"component": "notifier", "channel": channel_id, "error": error.to_string()}),
                );
                match error {
                    SlackError::EmptyText => PipelineError::validation(error.to_string()),
                    _ => PipelineError::upstream("failed to post message"),
                }
            })?;

        if !ack.ok {
            self.logger.log(
                Level::WARN,
                "messaging platform rejected message",
                json!({"component": "notifier", "channel": channel_id, "error": ack.error}),
            );
        }
        Ok(ack)
    }
}
