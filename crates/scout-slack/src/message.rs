use serde_json::{json, Value};

use crate::{SlackBlock, SlackError, SlackTextObject};

/// A message ready for dispatch. Text is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub channel_id: String,
    pub text: String,
    pub blocks: Vec<SlackBlock>,
    pub markup_enabled: bool,
}

impl OutboundMessage {
    /// Build the block sequence: one section carrying `text`, then an image block when
    /// `image_url` is present and non-blank.
    pub fn new(
        channel_id: impl Into<String>,
        text: impl Into<String>,
        image_url: Option<&str>,
        markup_enabled: bool,
    ) -> Result<Self, SlackError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SlackError::EmptyText);
        }

        let section_text = if markup_enabled {
            SlackTextObject::mrkdwn(text.clone())
        } else {
            SlackTextObject::plain(text.clone())
        };
        let mut blocks = vec![SlackBlock::section(section_text)];
        if let Some(image_url) = image_url.map(str::trim).filter(|url| !url.is_empty()) {
            blocks.push(SlackBlock::image(image_url));
        }

        Ok(Self {
            channel_id: channel_id.into(),
            text,
            blocks,
            markup_enabled,
        })
    }

    /// `chat.postMessage` body. The text is duplicated at top level for clients
    /// that ignore blocks.
    pub fn to_payload(&self) -> Value {
        json!({
            "channel": self.channel_id,
            "text": self.text,
            "blocks": self.blocks,
            "mrkdwn": self.markup_enabled,
        })
    }
}
