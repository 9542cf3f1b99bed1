//! Query orchestration: trigger parsing, refinement, search dispatch, summarization, and the
//! request flows the gateway exposes.
mod config;
mod dispatch;
mod error;
mod logger;
mod pipeline;
mod query;
mod refiner;
mod summarizer;
mod trigger;

#[cfg(test)]
mod test_support;

pub use config::ScoutConfig;
pub use dispatch::{format_mention_reply, SearchDispatcher, API_RESULT_LIMIT, MENTION_RESULT_LIMIT};
pub use error::PipelineError;
pub use logger::{LogEntry, PipelineLogger, RecordingPipelineLogger, TracingPipelineLogger};
pub use pipeline::{
    MessageFormat, Pipeline, PipelineComponents, SendMessageRequest, TriggerOutcome,
};
pub use query::Query;
pub use refiner::QueryRefiner;
pub use summarizer::{Summarizer, SUMMARY_FRAGMENT_LIMIT};
pub use trigger::{TriggerEvent, TriggerKind};

/// Sampling temperature used for every completion call.
pub const COMPLETION_TEMPERATURE: f32 = 0.7;
