use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(".")
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .add_source(
                File::with_name(
                    path.as_ref()
                        .join("config/default")
                        .to_string_lossy()
                        .as_ref(),
                )
                .required(false),
            )
            .add_source(
                File::with_name(
                    path.as_ref()
                        .join("config/local")
                        .to_string_lossy()
                        .as_ref(),
                )
                .required(false),
            )
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "GithubConfig::default_api_base")]
    pub api_base: String,
    #[serde(default = "GithubConfig::default_user_agent")]
    pub user_agent: String,
}

impl GithubConfig {
    fn default_api_base() -> String {
        "https://api.github.com/".to_string()
    }

    fn default_user_agent() -> String {
        "gitshame".to_string()
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: Self::default_api_base(),
            user_agent: Self::default_user_agent(),
        }
    }
}

/// Paging window for the activity fetch. The roast only ever looks at the
/// most recent slice of history: two event pages of 100 and the ten most
/// recently updated repositories.
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    #[serde(default = "FetcherConfig::default_event_pages")]
    pub event_pages: u32,
    #[serde(default = "FetcherConfig::default_events_per_page")]
    pub events_per_page: u32,
    #[serde(default = "FetcherConfig::default_repo_limit")]
    pub repo_limit: u32,
}

impl FetcherConfig {
    const fn default_event_pages() -> u32 {
        2
    }

    const fn default_events_per_page() -> u32 {
        100
    }

    const fn default_repo_limit() -> u32 {
        10
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            event_pages: Self::default_event_pages(),
            events_per_page: Self::default_events_per_page(),
            repo_limit: Self::default_repo_limit(),
        }
    }
}
