//! Events API callback handler.

use scout_pipeline::{TriggerEvent, TriggerOutcome};

use super::*;

/// Always acknowledges with 200 so the platform never retries a delivered event.
/// Only the URL verification handshake carries a body.
pub(super) async fn handle_slack_events(
    State(state): State<Arc<GatewayServerState>>,
    body: Bytes,
) -> Response {
    let payload = match serde_json::from_slice::<Value>(&body) {
        Ok(payload) => payload,
        Err(error) => {
            tracing::warn!(%error, "ignoring undecodable event payload");
            return StatusCode::OK.into_response();
        }
    };
    let Some(event) = TriggerEvent::from_events_payload(&payload) else {
        return StatusCode::OK.into_response();
    };

    match state.pipeline.handle_trigger_event(&event).await {
        TriggerOutcome::Challenge(challenge) => {
            (StatusCode::OK, Json(json!({ "challenge": challenge }))).into_response()
        }
        TriggerOutcome::Ignored | TriggerOutcome::Replied(_) | TriggerOutcome::Failed(_) => {
            StatusCode::OK.into_response()
        }
    }
}
