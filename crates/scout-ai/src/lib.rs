//! Completion-service client surface shared by the query refiner and summarizer.
mod openai;
mod types;

pub use openai::{OpenAiClient, OpenAiConfig};
pub use types::{ChatRequest, ChatResponse, ChatUsage, LlmClient, Message, MessageRole, ScoutAiError};
