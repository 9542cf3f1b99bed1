use super::openapi_document::OPENAPI_DOCUMENT;
use super::*;

pub(super) async fn handle_root() -> &'static str {
    "OK"
}

pub(super) async fn handle_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(super) async fn handle_openapi_document() -> Response {
    match serde_json::from_str::<Value>(OPENAPI_DOCUMENT) {
        Ok(document) => Json(document).into_response(),
        Err(error) => {
            GatewayApiError::internal(format!("invalid openapi document: {error}")).into_response()
        }
    }
}
