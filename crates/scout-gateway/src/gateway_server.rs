use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use scout_pipeline::{Pipeline, PipelineError};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

mod endpoints;
mod events_handler;
mod jira_handlers;
mod openapi_document;
mod root_handlers;
mod server_bootstrap;
mod slack_handlers;
mod types;

use endpoints::*;
use events_handler::handle_slack_events;
use jira_handlers::{handle_jira_comment_summary, handle_jira_comments, handle_jira_issues};
use root_handlers::{handle_health, handle_openapi_document, handle_root};
use slack_handlers::{handle_search_food, handle_slack_send};
use types::GatewayApiError;

pub use server_bootstrap::{build_gateway_router, run_gateway_server};

/// Listener settings for the gateway.
#[derive(Debug, Clone)]
pub struct GatewayServerConfig {
    pub bind: String,
}

/// Shared per-process state. Holds no mutable request data.
pub struct GatewayServerState {
    pub(crate) pipeline: Pipeline,
}

impl GatewayServerState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }
}
