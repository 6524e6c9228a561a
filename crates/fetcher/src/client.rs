use async_trait::async_trait;
use common::config::GithubConfig;
use reqwest::header;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::FetchError;

/// The three reads the roast pipeline needs. Implementations return raw
/// JSON; decoding into typed payloads happens in the service layer so stubs
/// in tests can hand back `json!` fixtures directly.
#[async_trait]
pub trait GithubClient: Send + Sync {
    async fn get_user(&self, login: &str) -> Result<Value, FetchError>;
    async fn list_user_events(
        &self,
        login: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Value>, FetchError>;
    async fn list_user_repos(&self, login: &str, limit: u32) -> Result<Vec<Value>, FetchError>;
}

pub struct RestGithubClient {
    http: reqwest::Client,
    base: Url,
}

impl RestGithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self, FetchError> {
        let base = Url::parse(&config.api_base)
            .map_err(|err| FetchError::Network(anyhow::Error::new(err)))?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| FetchError::Network(anyhow::Error::new(err)))?;
        Ok(Self { http, base })
    }

    async fn get_json(&self, url: Url) -> Result<Value, FetchError> {
        let endpoint = url.path().trim_start_matches('/').to_string();
        debug!(endpoint = %endpoint, "dispatching GitHub request");
        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|err| FetchError::Network(anyhow::Error::new(err)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status, &endpoint));
        }
        response
            .json()
            .await
            .map_err(|err| FetchError::Decode(anyhow::Error::new(err)))
    }

    async fn get_json_array(&self, url: Url) -> Result<Vec<Value>, FetchError> {
        match self.get_json(url).await? {
            Value::Array(items) => Ok(items),
            Value::Null => Ok(Vec::new()),
            other => Err(FetchError::Decode(anyhow::anyhow!(
                "expected array response, got {other}"
            ))),
        }
    }

    fn join(&self, path: &str) -> Result<Url, FetchError> {
        self.base
            .join(path)
            .map_err(|err| FetchError::Network(anyhow::Error::new(err)))
    }

    fn with_query(url: &mut Url, params: &[(&str, String)]) {
        let mut query_pairs = url.query_pairs_mut();
        for (key, val) in params {
            query_pairs.append_pair(key, val);
        }
    }
}

#[async_trait]
impl GithubClient for RestGithubClient {
    async fn get_user(&self, login: &str) -> Result<Value, FetchError> {
        let url = self.join(&format!("users/{login}"))?;
        self.get_json(url).await
    }

    async fn list_user_events(
        &self,
        login: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Value>, FetchError> {
        let mut url = self.join(&format!("users/{login}/events"))?;
        Self::with_query(
            &mut url,
            &[
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ],
        );
        self.get_json_array(url).await
    }

    async fn list_user_repos(&self, login: &str, limit: u32) -> Result<Vec<Value>, FetchError> {
        let mut url = self.join(&format!("users/{login}/repos"))?;
        Self::with_query(
            &mut url,
            &[
                ("sort", "updated".to_string()),
                ("per_page", limit.to_string()),
            ],
        );
        self.get_json_array(url).await
    }
}
