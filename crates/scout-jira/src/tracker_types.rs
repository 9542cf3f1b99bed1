use serde::{Deserialize, Serialize};
use serde_json::Value;

use scout_text::extract_document_text;

/// Assignee reported for issues nobody owns.
pub const UNASSIGNED_SENTINEL: &str = "Unassigned";
/// Placeholder for missing status names and comment authors.
pub const UNKNOWN_SENTINEL: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerIssue {
    pub key: String,
    pub url: String,
    pub summary: String,
    pub status: String,
    pub assignee: String,
}

impl TrackerIssue {
    pub(crate) fn from_raw(base_url: &str, raw: RawIssue) -> Self {
        let fields = raw.fields.unwrap_or_default();
        Self {
            url: format!("{base_url}/browse/{}", raw.key),
            key: raw.key,
            summary: fields.summary.unwrap_or_default(),
            status: fields
                .status
                .and_then(|status| status.name)
                .unwrap_or_else(|| UNKNOWN_SENTINEL.to_string()),
            assignee: fields
                .assignee
                .and_then(|user| user.display_name)
                .unwrap_or_else(|| UNASSIGNED_SENTINEL.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueComment {
    pub author: String,
    pub created_at: String,
    pub body_plain_text: String,
}

impl IssueComment {
    pub(crate) fn from_raw(raw: RawComment) -> Self {
        Self {
            author: raw
                .author
                .and_then(|user| user.display_name)
                .unwrap_or_else(|| UNKNOWN_SENTINEL.to_string()),
            created_at: raw.created.unwrap_or_default(),
            body_plain_text: extract_document_text(&raw.body),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSearchResponse {
    #[serde(default)]
    pub(crate) issues: Vec<RawIssue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawIssue {
    pub(crate) key: String,
    #[serde(default)]
    fields: Option<RawIssueFields>,
}

#[derive(Debug, Default, Deserialize)]
struct RawIssueFields {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    status: Option<RawStatus>,
    #[serde(default)]
    assignee: Option<RawUser>,
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    #[serde(default, rename = "displayName")]
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCommentPage {
    pub(crate) comments: Vec<RawComment>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawComment {
    #[serde(default)]
    author: Option<RawUser>,
    #[serde(default)]
    created: Option<String>,
    #[serde(default)]
    body: Value,
}
