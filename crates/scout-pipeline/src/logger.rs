//! Structured logging capability injected into pipeline components.

use std::sync::Mutex;

use serde_json::Value;
use tracing::Level;

/// Single capability: record `message` at `level` with a JSON object of context.
pub trait PipelineLogger: Send + Sync {
    fn log(&self, level: Level, message: &str, context: Value);
}

/// Forwards entries to the process-wide `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPipelineLogger;

impl PipelineLogger for TracingPipelineLogger {
    fn log(&self, level: Level, message: &str, context: Value) {
        match level {
            Level::ERROR => tracing::error!(context = %context, "{message}"),
            Level::WARN => tracing::warn!(context = %context, "{message}"),
            Level::INFO => tracing::info!(context = %context, "{message}"),
            Level::DEBUG => tracing::debug!(context = %context, "{message}"),
            Level::TRACE => tracing::trace!(context = %context, "{message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    pub context: Value,
}

/// Keeps entries in memory for assertions.
#[derive(Debug, Default)]
pub struct RecordingPipelineLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingPipelineLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn entries_for(&self, component: &str) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.context["component"] == component)
            .collect()
    }
}

impl PipelineLogger for RecordingPipelineLogger {
    fn log(&self, level: Level, message: &str, context: Value) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(LogEntry {
                level,
                message: message.to_string(),
                context,
            });
        }
    }
}
