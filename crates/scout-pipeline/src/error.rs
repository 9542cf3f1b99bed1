use scout_jira::JqlError;
use thiserror::Error;

/// Tagged failure of a pipeline flow. The transport shell maps `Validation` to 400
/// and `Upstream` to 500.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Upstream(String),
}

impl PipelineError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<JqlError> for PipelineError {
    fn from(error: JqlError) -> Self {
        Self::Validation(error.to_string())
    }
}
