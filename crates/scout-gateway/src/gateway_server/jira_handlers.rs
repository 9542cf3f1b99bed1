//! Issue-tracker API handlers.

use scout_jira::FilterSet;

use super::types::{IssueKeyParams, IssueSearchParams};
use super::*;

pub(super) async fn handle_jira_issues(
    State(state): State<Arc<GatewayServerState>>,
    Query(params): Query<IssueSearchParams>,
) -> Result<Json<Value>, GatewayApiError> {
    let filters = FilterSet::new(params.summary, params.assignee, params.status);
    let issues = state.pipeline.search_issues(&filters).await?;
    Ok(Json(json!({ "issues": issues })))
}

pub(super) async fn handle_jira_comments(
    State(state): State<Arc<GatewayServerState>>,
    Query(params): Query<IssueKeyParams>,
) -> Result<Json<Value>, GatewayApiError> {
    let comments = state
        .pipeline
        .issue_comments(params.key.as_deref())
        .await?;
    Ok(Json(json!({ "comments": comments })))
}

pub(super) async fn handle_jira_comment_summary(
    State(state): State<Arc<GatewayServerState>>,
    Query(params): Query<IssueKeyParams>,
) -> Result<Json<Value>, GatewayApiError> {
    let ack = state
        .pipeline
        .summarize_issue_comments(params.key.as_deref(), params.channel.as_deref())
        .await?;
    Ok(Json(json!({ "ok": ack.ok })))
}
