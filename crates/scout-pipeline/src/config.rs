use scout_ai::OpenAiConfig;
use scout_jira::JiraConfig;
use scout_search::GoogleSearchConfig;
use scout_slack::SlackConfig;

/// Resolved upstream settings, built once at startup and handed to [`crate::Pipeline::from_config`].
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    pub model: String,
    pub openai: OpenAiConfig,
    pub search: GoogleSearchConfig,
    pub jira: JiraConfig,
    pub slack: SlackConfig,
}
