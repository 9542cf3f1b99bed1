//! Messaging-platform surface: block model, outbound message assembly, Web API client, notifier.
mod blocks;
mod message;
mod notifier;
mod slack_api_client;

pub use blocks::{SlackBlock, SlackTextObject, IMAGE_ALT_TEXT};
pub use message::OutboundMessage;
pub use notifier::Notifier;
pub use slack_api_client::{SlackApiClient, SlackConfig};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
/// Enumerates supported `SlackError` values.
pub enum SlackError {
    #[error("missing slack bot token")]
    MissingToken,
    #[error("outbound message text must not be empty")]
    EmptyText,
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("slack returned non-success status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("invalid slack response: {0}")]
    InvalidResponse(String),
}

/// Acknowledgment returned by `chat.postMessage`, passed through as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackPostAck {
    pub ok: bool,
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[async_trait]
/// Trait contract for posting one message to the messaging platform.
pub trait SlackMessenger: Send + Sync {
    async fn post_message(&self, message: &OutboundMessage) -> Result<SlackPostAck, SlackError>;
}
