use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use httpmock::prelude::*;
use scout_ai::OpenAiConfig;
use scout_gateway::{build_gateway_router, GatewayServerState};
use scout_jira::JiraConfig;
use scout_pipeline::{Pipeline, RecordingPipelineLogger, ScoutConfig};
use scout_search::GoogleSearchConfig;
use scout_slack::SlackConfig;
use serde_json::{json, Value};
use tokio::net::TcpListener;

fn upstream_config(server: &MockServer) -> ScoutConfig {
    ScoutConfig {
        model: "gpt-3.5-turbo".to_string(),
        openai: OpenAiConfig {
            api_base: format!("{}/v1", server.base_url()),
            api_key: "sk-test".to_string(),
            organization: None,
            request_timeout_ms: 5_000,
        },
        search: GoogleSearchConfig {
            api_base: format!("{}/customsearch/v1", server.base_url()),
            api_key: "g-key".to_string(),
            engine_id: "cx-1".to_string(),
            request_timeout_ms: 5_000,
        },
        jira: JiraConfig {
            base_url: format!("{}/jira", server.base_url()),
            api_token: "raw-token".to_string(),
            request_timeout_ms: 5_000,
        },
        slack: SlackConfig {
            api_base: format!("{}/api", server.base_url()),
            bot_token: "xoxb-test".to_string(),
            request_timeout_ms: 5_000,
        },
    }
}

async fn spawn_gateway(
    config: &ScoutConfig,
    logger: Arc<RecordingPipelineLogger>,
) -> Result<(SocketAddr, tokio::task::JoinHandle<()>)> {
    let pipeline = Pipeline::from_config(config, logger).context("build pipeline")?;
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .context("bind ephemeral listener")?;
    let addr = listener.local_addr().context("resolve listener addr")?;
    let app = build_gateway_router(Arc::new(GatewayServerState::new(pipeline)));
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    tokio::time::sleep(Duration::from_millis(20)).await;
    Ok((addr, handle))
}

fn completion(text: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
    })
}

fn mention_payload(text: &str) -> Value {
    json!({
        "type": "event_callback",
        "event": {"type": "app_mention", "text": text, "channel": "C100", "user": "U9"}
    })
}

#[tokio::test]
async fn integration_mention_refines_searches_and_posts_top_three() {
    let server = MockServer::start();
    let openai = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer sk-test")
            .json_body_includes(json!({"model": "gpt-3.5-turbo"}).to_string());
        then.status(200).json_body(completion(" ramen gangnam "));
    });
    let google = server.mock(|when, then| {
        when.method(GET)
            .path("/customsearch/v1")
            .query_param("q", "ramen gangnam")
            .query_param("num", "3");
        then.status(200).json_body(json!({
            "items": [
                {"title": "A", "link": "https://a.example", "htmlTitle": "<b>A</b>"},
                {"title": "B", "link": "https://b.example"},
                {"title": "C", "link": "https://c.example"}
            ]
        }));
    });
    let slack = server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat.postMessage")
            .header("authorization", "Bearer xoxb-test")
            .json_body_includes(
                json!({
                    "channel": "C100",
                    "text": ":round_pushpin: *\"ramen gangnam\" search results:*\n\n1. *A*\nhttps://a.example\n\n2. *B*\nhttps://b.example\n\n3. *C*\nhttps://c.example",
                    "mrkdwn": true
                })
                .to_string(),
            );
        then.status(200).json_body(json!({"ok": true, "ts": "1.1"}));
    });
    let logger = Arc::new(RecordingPipelineLogger::new());
    let (addr, handle) = spawn_gateway(&upstream_config(&server), logger.clone())
        .await
        .expect("spawn gateway");

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/slack/events"))
        .json(&mention_payload("<@U0BOT> where can I get ramen in gangnam?"))
        .send()
        .await
        .expect("send event");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    openai.assert();
    google.assert();
    slack.assert();
    assert!(logger.entries().is_empty());
    handle.abort();
}

#[tokio::test]
async fn regression_mention_falls_back_to_raw_text_when_completion_fails() {
    let server = MockServer::start();
    let openai = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(500).body("overloaded");
    });
    let google = server.mock(|when, then| {
        when.method(GET)
            .path("/customsearch/v1")
            .query_param("q", "cheap sushi");
        then.status(200).json_body(json!({}));
    });
    let slack = server.mock(|when, then| {
        when.method(POST).path("/api/chat.postMessage").json_body_includes(
            json!({"text": ":round_pushpin: *\"cheap sushi\" search results:*\n\nNo search results found."})
                .to_string(),
        );
        then.status(200).json_body(json!({"ok": true, "ts": "2.2"}));
    });
    let logger = Arc::new(RecordingPipelineLogger::new());
    let (addr, handle) = spawn_gateway(&upstream_config(&server), logger.clone())
        .await
        .expect("spawn gateway");

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/slack/events"))
        .json(&mention_payload("<@U0BOT> cheap sushi"))
        .send()
        .await
        .expect("send event");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    openai.assert_calls(1);
    google.assert();
    slack.assert();
    assert_eq!(logger.entries_for("query_refiner").len(), 1);
    handle.abort();
}

#[tokio::test]
async fn regression_mention_acknowledges_when_search_index_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(completion("pizza"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/customsearch/v1");
        then.status(429).body("quota");
    });
    let slack = server.mock(|when, then| {
        when.method(POST).path("/api/chat.postMessage");
        then.status(200).json_body(json!({"ok": true}));
    });
    let logger = Arc::new(RecordingPipelineLogger::new());
    let (addr, handle) = spawn_gateway(&upstream_config(&server), logger.clone())
        .await
        .expect("spawn gateway");

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/slack/events"))
        .json(&mention_payload("<@U0BOT> pizza"))
        .send()
        .await
        .expect("send event");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.expect("body"), "");
    slack.assert_calls(0);
    let failures = logger.entries_for("search_dispatcher");
    assert!(failures[0].context["error"]
        .as_str()
        .is_some_and(|error| error.contains("429")));
    handle.abort();
}

#[tokio::test]
async fn integration_comment_summary_flows_from_tracker_to_channel() {
    let server = MockServer::start();
    let jira = server.mock(|when, then| {
        when.method(GET)
            .path("/jira/rest/api/3/issue/WEB-7/comment")
            .header("authorization", "Basic raw-token");
        then.status(200).json_body(json!({
            "comments": [
                {
                    "author": {"displayName": "Park"},
                    "created": "2024-03-01T10:00:00.000+0000",
                    "body": {"type": "doc", "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": "Reproduced"}, {"type": "text", "text": "on staging"}]}
                    ]}
                },
                {
                    "author": {"displayName": "Lee"},
                    "created": "2024-03-02T10:00:00.000+0000",
                    "body": {"type": "doc", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "Fix merged"}]}]}
                }
            ]
        }));
    });
    let openai = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions").json_body_includes(
            json!({"messages": [{"role": "system"}, {"role": "user", "content": "Summarize the following comments:\n1. Reproduced on staging\n2. Fix merged"}]})
                .to_string(),
        );
        then.status(200).json_body(completion("Fixed on staging and merged."));
    });
    let slack = server.mock(|when, then| {
        when.method(POST).path("/api/chat.postMessage").json_body_includes(
            json!({
                "channel": "C200",
                "text": "*WEB-7 comment summary*\nFixed on staging and merged."
            })
            .to_string(),
        );
        then.status(200).json_body(json!({"ok": true, "ts": "3.3"}));
    });
    let (addr, handle) = spawn_gateway(
        &upstream_config(&server),
        Arc::new(RecordingPipelineLogger::new()),
    )
    .await
    .expect("spawn gateway");

    let response = reqwest::Client::new()
        .get(format!(
            "http://{addr}/api/jira/comments/summary?key=WEB-7&channel=C200"
        ))
        .send()
        .await
        .expect("send summary request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.expect("json"),
        json!({"ok": true})
    );
    jira.assert();
    openai.assert();
    slack.assert();
    handle.abort();
}

#[tokio::test]
async fn integration_issue_search_builds_jql_and_caps_at_five() {
    let server = MockServer::start();
    let issues = (1..=6)
        .map(|index| {
            json!({
                "key": format!("OPS-{index}"),
                "fields": {"summary": "Disk full", "status": {"name": "Open"}, "assignee": null}
            })
        })
        .collect::<Vec<_>>();
    let jira = server.mock(|when, then| {
        when.method(GET)
            .path("/jira/rest/api/3/search")
            .query_param("jql", "summary ~ \"disk\" AND assignee = \"kim\"")
            .query_param("maxResults", "5");
        then.status(200).json_body(json!({ "issues": issues }));
    });
    let (addr, handle) = spawn_gateway(
        &upstream_config(&server),
        Arc::new(RecordingPipelineLogger::new()),
    )
    .await
    .expect("spawn gateway");

    let body = reqwest::Client::new()
        .get(format!(
            "http://{addr}/api/jira/issues?summary=disk&assignee=kim&status=%20"
        ))
        .send()
        .await
        .expect("send search")
        .json::<Value>()
        .await
        .expect("json");

    jira.assert();
    let returned = body["issues"].as_array().expect("issues array");
    assert_eq!(returned.len(), 5);
    assert_eq!(returned[0]["assignee"], "Unassigned");
    assert_eq!(
        returned[0]["url"],
        format!("{}/jira/browse/OPS-1", server.base_url())
    );
    handle.abort();
}

#[tokio::test]
async fn integration_slack_send_markdown_posts_converted_blocks() {
    let server = MockServer::start();
    let slack = server.mock(|when, then| {
        when.method(POST).path("/api/chat.postMessage").json_body_includes(
            json!({
                "channel": "C300",
                "text": "*Deploy*\n• _api_ is `green`",
                "mrkdwn": true,
                "blocks": [
                    {"type": "section", "text": {"type": "mrkdwn", "text": "*Deploy*\n• _api_ is `green`"}},
                    {"type": "image", "image_url": "https://img.example/graph.png", "alt_text": "image"}
                ]
            })
            .to_string(),
        );
        then.status(200).json_body(json!({"ok": true, "ts": "4.4"}));
    });
    let (addr, handle) = spawn_gateway(
        &upstream_config(&server),
        Arc::new(RecordingPipelineLogger::new()),
    )
    .await
    .expect("spawn gateway");

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/slack/send"))
        .json(&json!({
            "channel": "C300",
            "message": "# Deploy\n\n\n* *api* is ```green```",
            "imageUrl": "https://img.example/graph.png",
            "format": "markdown"
        }))
        .send()
        .await
        .expect("send message");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.expect("json"),
        json!({"ok": true, "ts": "4.4"})
    );
    slack.assert();
    handle.abort();
}
