//! Command-line configuration and process bootstrap for the `scout` binary.
mod bootstrap_helpers;
mod cli_args;

pub use bootstrap_helpers::init_tracing;
pub use cli_args::Cli;

use anyhow::Result;
use scout_ai::OpenAiConfig;
use scout_gateway::GatewayServerConfig;
use scout_jira::JiraConfig;
use scout_pipeline::ScoutConfig;
use scout_search::GoogleSearchConfig;
use scout_slack::SlackConfig;

/// Convert parsed flags into the explicit upstream configuration.
pub fn build_scout_config(cli: &Cli) -> ScoutConfig {
    let timeout = cli.request_timeout_ms;
    ScoutConfig {
        model: cli.model.trim().to_string(),
        openai: OpenAiConfig {
            api_base: cli.openai_api_base.clone(),
            api_key: cli.openai_api_key.clone().unwrap_or_default(),
            organization: cli.openai_organization.clone(),
            request_timeout_ms: timeout,
        },
        search: GoogleSearchConfig {
            api_base: cli.google_search_api_base.clone(),
            api_key: cli.google_api_key.clone().unwrap_or_default(),
            engine_id: cli.google_cx_id.clone().unwrap_or_default(),
            request_timeout_ms: timeout,
        },
        jira: JiraConfig {
            base_url: cli.jira_base_url.clone().unwrap_or_default(),
            api_token: cli.jira_api_token.clone().unwrap_or_default(),
            request_timeout_ms: timeout,
        },
        slack: SlackConfig {
            api_base: cli.slack_api_base.clone(),
            bot_token: cli.slack_token.clone().unwrap_or_default(),
            request_timeout_ms: timeout,
        },
    }
}

pub fn build_gateway_config(cli: &Cli) -> GatewayServerConfig {
    GatewayServerConfig {
        bind: format!("{}:{}", cli.bind_host.trim(), cli.port),
    }
}

/// Names of upstream credentials left unset. Used for a startup warning only.
pub fn missing_credentials(cli: &Cli) -> Vec<&'static str> {
    [
        ("OPENAI_API_KEY", &cli.openai_api_key),
        ("GOOGLE_API_KEY", &cli.google_api_key),
        ("GOOGLE_CX_ID", &cli.google_cx_id),
        ("JIRA_BASE_URL", &cli.jira_base_url),
        ("JIRA_API_TOKEN", &cli.jira_api_token),
        ("SLACK_TOKEN", &cli.slack_token),
    ]
    .into_iter()
    .filter(|(_, value)| value.as_deref().map(str::trim).unwrap_or_default().is_empty())
    .map(|(name, _)| name)
    .collect()
}

pub async fn run_cli(cli: Cli) -> Result<()> {
    let missing = missing_credentials(&cli);
    if !missing.is_empty() {
        tracing::warn!(
            missing = %missing.join(","),
            "starting with unset credentials; affected routes will fail upstream"
        );
    }

    let config = build_scout_config(&cli);
    let logger = std::sync::Arc::new(scout_pipeline::TracingPipelineLogger);
    let pipeline = scout_pipeline::Pipeline::from_config(&config, logger)?;
    scout_gateway::run_gateway_server(build_gateway_config(&cli), pipeline).await
}
