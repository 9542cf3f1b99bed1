use super::*;

/// Error body returned by every API route: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct GatewayApiError {
    pub(super) status: StatusCode,
    pub(super) message: String,
}

impl GatewayApiError {
    pub(super) fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub(super) fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<PipelineError> for GatewayApiError {
    fn from(error: PipelineError) -> Self {
        match error {
            PipelineError::Validation(message) => Self::bad_request(message),
            PipelineError::Upstream(message) => Self::internal(message),
        }
    }
}

impl IntoResponse for GatewayApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct IssueSearchParams {
    pub(super) summary: Option<String>,
    pub(super) assignee: Option<String>,
    pub(super) status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct IssueKeyParams {
    pub(super) key: Option<String>,
    pub(super) channel: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct SearchParams {
    pub(super) query: Option<String>,
}
