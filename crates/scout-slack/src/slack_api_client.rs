//! Slack Web API client used by the notifier.

use std::time::Duration;

use async_trait::async_trait;

use crate::{OutboundMessage, SlackError, SlackMessenger, SlackPostAck};

#[derive(Debug, Clone)]
pub struct SlackConfig {
    pub api_base: String,
    pub bot_token: String,
    pub request_timeout_ms: u64,
}

#[derive(Clone)]
pub struct SlackApiClient {
    http: reqwest::Client,
    api_base: String,
    bot_token: String,
}

impl SlackApiClient {
    pub fn new(config: SlackConfig) -> Result<Self, SlackError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("scout-notifier"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.request_timeout_ms.max(1)))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token: config.bot_token.trim().to_string(),
        })
    }
}

#[async_trait]
impl SlackMessenger for SlackApiClient {
    /// Posts via `chat.postMessage`. An `ok:false` body is returned as-is; only
    /// transport, status and decode failures are errors.
    async fn post_message(&self, message: &OutboundMessage) -> Result<SlackPostAck, SlackError> {
        if self.bot_token.is_empty() {
            return Err(SlackError::MissingToken);
        }

        let response = self
            .http
            .post(format!("{}/chat.postMessage", self.api_base))
            .bearer_auth(&self.bot_token)
            .json(&message.to_payload())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SlackError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<SlackPostAck>()
            .await
            .map_err(|error| SlackError::InvalidResponse(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::{SlackApiClient, SlackConfig};
    use crate::{OutboundMessage, SlackError, SlackMessenger};

    fn test_client(api_base: String, bot_token: &str) -> SlackApiClient {
        SlackApiClient::new(SlackConfig {
            api_base,
            bot_token: bot_token.to_string(),
            request_timeout_ms: 5_000,
        })
        .expect("slack client")
    }

    #[tokio::test]
    async fn integration_post_message_sends_bearer_token_and_blocks() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/chat.postMessage")
                .header("authorization", "Bearer xoxb-test")
                .json_body_includes(
                    json!({
                        "channel": "C123",
                        "text": "*hello*",
                        "mrkdwn": true,
                        "blocks": [
                            {"type": "section", "text": {"type": "mrkdwn", "text": "*hello*"}},
                            {"type": "image", "image_url": "https://img/a.png", "alt_text": "image"}
                        ]
                    })
                    .to_string(),
                );
            then.status(200)
                .json_body(json!({"ok": true, "channel": "C123", "ts": "1710000000.000200"}));
        });
        let message =
            OutboundMessage::new("C123", "*hello*", Some("https://img/a.png"), true).expect("message");

        let ack = test_client(format!("{}/", server.base_url()), "xoxb-test")
            .post_message(&message)
            .await
            .expect("post succeeds");

        mock.assert();
        assert!(ack.ok);
        assert_eq!(ack.ts.as_deref(), Some("1710000000.000200"));
    }

    #[tokio::test]
    async fn functional_platform_rejection_is_passed_through() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/chat.postMessage");
            then.status(200)
                .json_body(json!({"ok": false, "error": "channel_not_found"}));
        });
        let message = OutboundMessage::new("CX", "hi", None, false).expect("message");

        let ack = test_client(server.base_url(), "xoxb-test")
            .post_message(&message)
            .await
            .expect("ok:false is not an error");

        assert!(!ack.ok);
        assert_eq!(ack.ts, None);
        assert_eq!(ack.error.as_deref(), Some("channel_not_found"));
    }

    #[tokio::test]
    async fn regression_post_message_does_not_retry_server_errors() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/chat.postMessage");
            then.status(503).body("unavailable");
        });
        let message = OutboundMessage::new("C1", "hi", None, false).expect("message");

        let error = test_client(server.base_url(), "xoxb-test")
            .post_message(&message)
            .await
            .expect_err("503 fails");

        mock.assert_calls(1);
        assert!(matches!(error, SlackError::HttpStatus { status: 503, .. }));
    }

    #[tokio::test]
    async fn regression_missing_token_and_malformed_body_are_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/chat.postMessage");
            then.status(200).body("<html>");
        });
        let message = OutboundMessage::new("C1", "hi", None, false).expect("message");

        let missing = test_client(server.base_url(), " ")
            .post_message(&message)
            .await
            .expect_err("blank token fails");
        assert!(matches!(missing, SlackError::MissingToken));

        let malformed = test_client(server.base_url(), "xoxb-test")
            .post_message(&message)
            .await
            .expect_err("html body fails");
        assert!(matches!(malformed, SlackError::InvalidResponse(_)));
    }
}
