//! Direct send and search convenience handlers.

use scout_pipeline::SendMessageRequest;

use super::types::SearchParams;
use super::*;

pub(super) async fn handle_slack_send(
    State(state): State<Arc<GatewayServerState>>,
    body: Bytes,
) -> Result<Json<Value>, GatewayApiError> {
    let request = serde_json::from_slice::<SendMessageRequest>(&body)
        .map_err(|error| GatewayApiError::bad_request(format!("invalid request body: {error}")))?;
    let ack = state.pipeline.send_message(&request).await?;
    Ok(Json(json!({ "ok": ack.ok, "ts": ack.ts })))
}

pub(super) async fn handle_search_food(
    State(state): State<Arc<GatewayServerState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, GatewayApiError> {
    let items = state.pipeline.search_web(params.query.as_deref()).await?;
    Ok(Json(json!(items)))
}
