use std::sync::Arc;

use crate::{OutboundMessage, SlackError, SlackMessenger, SlackPostAck};

/// Assembles an [`OutboundMessage`] and hands it to the configured messenger.
#[derive(Clone)]
pub struct Notifier {
    messenger: Arc<dyn SlackMessenger>,
}

impl Notifier {
    pub fn new(messenger: Arc<dyn SlackMessenger>) -> Self {
        Self { messenger }
    }

    pub async fn notify(
        &self,
        channel_id: &str,
        text: &str,
        image_url: Option<&str>,
        markup_enabled: bool,
    ) -> Result<SlackPostAck, SlackError> {
        let message = OutboundMessage::new(channel_id, text, image_url, markup_enabled)?;
        self.messenger.post_message(&message).await
    }
}
