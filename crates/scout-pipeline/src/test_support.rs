//! Scripted fakes for the upstream traits.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use scout_ai::{ChatRequest, ChatResponse, ChatUsage, LlmClient, Message, ScoutAiError};
use scout_jira::{IssueComment, IssueTracker, JiraError, TrackerIssue};
use scout_search::{SearchError, SearchIndex, SearchResultItem};
use scout_slack::{OutboundMessage, SlackError, SlackMessenger, SlackPostAck};

pub(crate) fn reply(text: &str) -> Result<ChatResponse, ScoutAiError> {
    Ok(ChatResponse {
        message: Message::assistant_text(text),
        finish_reason: Some("stop".to_string()),
        usage: ChatUsage::default(),
    })
}

#[derive(Default)]
pub(crate) struct ScriptedLlm {
    replies: Mutex<VecDeque<Result<ChatResponse, ScoutAiError>>>,
    pub(crate) requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedLlm {
    pub(crate) fn new(replies: Vec<Result<ChatResponse, ScoutAiError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ScoutAiError> {
        self.requests.lock().expect("requests lock").push(request);
        self.replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .unwrap_or(Err(ScoutAiError::InvalidResponse("no scripted reply".to_string())))
    }
}

pub(crate) fn web_item(index: usize) -> SearchResultItem {
    SearchResultItem {
        title: format!("Result {index}"),
        link: format!("https://r{index}.example"),
        snippet: None,
    }
}

pub(crate) struct ScriptedIndex {
    result: Mutex<Option<Result<Vec<SearchResultItem>, SearchError>>>,
    pub(crate) queries: Mutex<Vec<(String, usize)>>,
}

impl ScriptedIndex {
    pub(crate) fn returning(items: Vec<SearchResultItem>) -> Self {
        Self {
            result: Mutex::new(Some(Ok(items))),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(status: u16) -> Self {
        Self {
            result: Mutex::new(Some(Err(SearchError::HttpStatus {
                status,
                body: "upstream down".to_string(),
            }))),
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SearchIndex for ScriptedIndex {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResultItem>, SearchError> {
        self.queries
            .lock()
            .expect("queries lock")
            .push((query.to_string(), max_results));
        self.result
            .lock()
            .expect("result lock")
            .take()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub(crate) fn issue(index: usize) -> TrackerIssue {
    TrackerIssue {
        key: format!("WEB-{index}"),
        url: format!("https://jira.example/browse/WEB-{index}"),
        summary: format!("Issue {index}"),
        status: "Open".to_string(),
        assignee: "Unassigned".to_string(),
    }
}

pub(crate) fn comment(body: &str) -> IssueComment {
    IssueComment {
        author: "Kim".to_string(),
        created_at: "2024-01-01T00:00:00.000+0000".to_string(),
        body_plain_text: body.to_string(),
    }
}

#[derive(Default)]
pub(crate) struct ScriptedTracker {
    pub(crate) issues: Vec<TrackerIssue>,
    pub(crate) comments: Vec<IssueComment>,
    pub(crate) fail_with_status: Option<u16>,
    pub(crate) jql_seen: Mutex<Vec<String>>,
}

impl ScriptedTracker {
    fn failure(&self) -> Option<JiraError> {
        self.fail_with_status.map(|status| JiraError::HttpStatus {
            status,
            body: "tracker down".to_string(),
        })
    }
}

#[async_trait]
impl IssueTracker for ScriptedTracker {
    async fn search_issues(
        &self,
        jql: &str,
        _max_results: usize,
    ) -> Result<Vec<TrackerIssue>, JiraError> {
        self.jql_seen.lock().expect("jql lock").push(jql.to_string());
        if let Some(error) = self.failure() {
            return Err(error);
        }
        Ok(self.issues.clone())
    }

    async fn list_comments(&self, _issue_key: &str) -> Result<Vec<IssueComment>, JiraError> {
        if let Some(error) = self.failure() {
            return Err(error);
        }
        Ok(self.comments.clone())
    }
}

pub(crate) struct ScriptedMessenger {
    ack: Option<SlackPostAck>,
    pub(crate) sent: Mutex<Vec<OutboundMessage>>,
}

impl ScriptedMessenger {
    pub(crate) fn acking(ts: &str) -> Self {
        Self {
            ack: Some(SlackPostAck {
                ok: true,
                ts: Some(ts.to_string()),
                error: None,
            }),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn rejecting(error: &str) -> Self {
        Self {
            ack: Some(SlackPostAck {
                ok: false,
                ts: None,
                error: Some(error.to_string()),
            }),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            ack: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().expect("sent lock").clone()
    }
}

#[async_trait]
impl SlackMessenger for ScriptedMessenger {
    async fn post_message(&self, message: &OutboundMessage) -> Result<SlackPostAck, SlackError> {
        self.sent.lock().expect("sent lock").push(message.clone());
        self.ack.clone().ok_or(SlackError::HttpStatus {
            status: 500,
            body: "internal_error".to_string(),
        })
    }
}
