//! Gateway server bootstrap and router wiring.

use tower_http::cors::CorsLayer;

use super::*;

/// Bind `config.bind` and serve until ctrl-c.
pub async fn run_gateway_server(config: GatewayServerConfig, pipeline: Pipeline) -> Result<()> {
    let bind_addr = config
        .bind
        .parse::<SocketAddr>()
        .with_context(|| format!("invalid gateway bind address '{}'", config.bind))?;
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind gateway server on {bind_addr}"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to resolve bound gateway server address")?;
    tracing::info!(addr = %local_addr, "gateway server listening");

    let app = build_gateway_router(Arc::new(GatewayServerState::new(pipeline)));
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("gateway server exited unexpectedly")?;

    tracing::info!("gateway server stopped");
    Ok(())
}

pub fn build_gateway_router(state: Arc<GatewayServerState>) -> Router {
    Router::new()
        .route(ROOT_ENDPOINT, get(handle_root))
        .route(HEALTH_ENDPOINT, get(handle_health))
        .route(OPENAPI_ENDPOINT, get(handle_openapi_document))
        .route(SLACK_EVENTS_ENDPOINT, post(handle_slack_events))
        .route(JIRA_ISSUES_ENDPOINT, get(handle_jira_issues))
        .route(JIRA_COMMENTS_ENDPOINT, get(handle_jira_comments))
        .route(
            JIRA_COMMENT_SUMMARY_ENDPOINT,
            get(handle_jira_comment_summary),
        )
        .route(SLACK_SEND_ENDPOINT, post(handle_slack_send))
        .route(SEARCH_FOOD_ENDPOINT, get(handle_search_food))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
