use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// `app_mention` callback from the Events API.
    Mention,
    /// Events API endpoint handshake.
    UrlVerification,
    /// Library-only entry for embedders that call [`crate::Pipeline::handle_trigger_event`]
    /// themselves. No gateway route produces it.
    Direct,
}

/// One inbound trigger, built per request and discarded after handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerEvent {
    pub kind: TriggerKind,
    pub raw_text: String,
    pub channel_id: String,
    pub challenge_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EventEnvelope {
    #[serde(rename = "type", default)]
    envelope_type: String,
    #[serde(default)]
    challenge: Option<String>,
    #[serde(default)]
    event: Option<EventBody>,
}

#[derive(Debug, Deserialize)]
struct EventBody {
    #[serde(rename = "type", default)]
    event_type: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    channel: String,
}

impl TriggerEvent {
    /// Parse an Events API callback body. Returns `None` for anything that is
    /// neither a URL verification handshake nor an `app_mention` event.
    pub fn from_events_payload(payload: &Value) -> Option<Self> {
        let envelope = EventEnvelope::deserialize(payload).ok()?;
        if envelope.envelope_type == "url_verification" {
            return Some(Self {
                kind: TriggerKind::UrlVerification,
                raw_text: String::new(),
                channel_id: String::new(),
                challenge_token: Some(envelope.challenge.unwrap_or_default()),
            });
        }

        let event = envelope.event?;
        if event.event_type != "app_mention" {
            return None;
        }
        Some(Self {
            kind: TriggerKind::Mention,
            raw_text: event.text,
            channel_id: event.channel,
            challenge_token: None,
        })
    }

    /// A trigger raised by in-process code rather than the chat platform. Runs the same
    /// refine, search and reply flow as a mention. The HTTP gateway never builds one.
    pub fn direct(channel_id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            kind: TriggerKind::Direct,
            raw_text: raw_text.into(),
            channel_id: channel_id.into(),
            challenge_token: None,
        }
    }
}
