use clap::Parser;

fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

#[derive(Debug, Parser)]
#[command(
    name = "scout",
    about = "Chat-triggered search, issue-tracker lookups and summaries delivered to Slack",
    version
)]
pub struct Cli {
    #[arg(
        long = "openai-api-key",
        env = "OPENAI_API_KEY",
        hide_env_values = true,
        help = "Credential for the chat-completions service used for refinement and summaries"
    )]
    pub openai_api_key: Option<String>,

    #[arg(
        long = "openai-api-base",
        env = "OPENAI_API_BASE",
        default_value = "https://api.openai.com/v1",
        help = "Base URL for the OpenAI-compatible completions API"
    )]
    pub openai_api_base: String,

    #[arg(
        long = "openai-organization",
        env = "OPENAI_ORGANIZATION",
        help = "Optional OpenAI-Organization header value"
    )]
    pub openai_organization: Option<String>,

    #[arg(
        long,
        env = "SCOUT_MODEL",
        default_value = "gpt-3.5-turbo",
        help = "Completion model used for query refinement and summarization"
    )]
    pub model: String,

    #[arg(
        long = "google-api-key",
        env = "GOOGLE_API_KEY",
        hide_env_values = true,
        help = "Custom Search JSON API key"
    )]
    pub google_api_key: Option<String>,

    #[arg(
        long = "google-cx-id",
        env = "GOOGLE_CX_ID",
        help = "Programmable search engine identifier"
    )]
    pub google_cx_id: Option<String>,

    #[arg(
        long = "google-search-api-base",
        env = "GOOGLE_SEARCH_API_BASE",
        default_value = "https://www.googleapis.com/customsearch/v1",
        help = "Custom Search endpoint URL"
    )]
    pub google_search_api_base: String,

    #[arg(
        long = "jira-base-url",
        env = "JIRA_BASE_URL",
        help = "Jira Cloud site URL, e.g. https://acme.atlassian.net"
    )]
    pub jira_base_url: Option<String>,

    #[arg(
        long = "jira-api-token",
        env = "JIRA_API_TOKEN",
        hide_env_values = true,
        help = "Value sent verbatim after 'Basic ' in the Authorization header"
    )]
    pub jira_api_token: Option<String>,

    #[arg(
        long = "slack-token",
        env = "SLACK_TOKEN",
        hide_env_values = true,
        help = "Slack bot token used for chat.postMessage"
    )]
    pub slack_token: Option<String>,

    #[arg(
        long = "slack-api-base",
        env = "SLACK_API_BASE",
        default_value = "https://slack.com/api",
        help = "Slack Web API base URL"
    )]
    pub slack_api_base: String,

    #[arg(
        long = "bind-host",
        env = "SCOUT_BIND_HOST",
        default_value = "0.0.0.0",
        help = "Interface the gateway listens on"
    )]
    pub bind_host: String,

    #[arg(long, env = "PORT", default_value_t = 3000, help = "Gateway listen port")]
    pub port: u16,

    #[arg(
        long = "request-timeout-ms",
        env = "SCOUT_REQUEST_TIMEOUT_MS",
        default_value_t = 30_000,
        value_parser = parse_positive_u64,
        help = "Transport timeout applied to every outbound HTTP call"
    )]
    pub request_timeout_ms: u64,
}
