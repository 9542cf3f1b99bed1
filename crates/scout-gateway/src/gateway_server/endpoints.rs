//! Route paths served by the gateway.

pub(super) const ROOT_ENDPOINT: &str = "/";
pub(super) const HEALTH_ENDPOINT: &str = "/health";
pub(super) const OPENAPI_ENDPOINT: &str = "/openapi.json";
pub(super) const SLACK_EVENTS_ENDPOINT: &str = "/slack/events";
pub(super) const JIRA_ISSUES_ENDPOINT: &str = "/api/jira/issues";
pub(super) const JIRA_COMMENTS_ENDPOINT: &str = "/api/jira/comments";
pub(super) const JIRA_COMMENT_SUMMARY_ENDPOINT: &str = "/api/jira/comments/summary";
pub(super) const SLACK_SEND_ENDPOINT: &str = "/api/slack/send";
pub(super) const SEARCH_FOOD_ENDPOINT: &str = "/api/search/food";
