use std::sync::Arc;

use common::config::FetcherConfig;
use normalizer::models::{Event, Repository, UserProfile};
use normalizer::payloads::{EventPayload, RepoPayload, UserPayload};
use normalizer::{normalize_event, normalize_repo, normalize_user};
use tracing::{info, warn};

use crate::client::GithubClient;
use crate::error::FetchError;

/// A fully materialized activity snapshot. This is the only thing the core
/// ever sees; if any fetch fails the core is simply not invoked.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub profile: UserProfile,
    pub events: Vec<Event>,
    pub repos: Vec<Repository>,
}

pub struct ProfileFetcher<C: GithubClient> {
    client: Arc<C>,
    config: FetcherConfig,
}

impl<C: GithubClient> ProfileFetcher<C> {
    pub fn new(client: Arc<C>, config: FetcherConfig) -> Self {
        Self { client, config }
    }

    /// Profile first, then the event pages in order, then repositories.
    /// Page results are concatenated so the feed stays newest-first across
    /// the window. Entries that fail to decode are skipped, not fatal.
    pub async fn fetch_dataset(&self, login: &str) -> Result<Dataset, FetchError> {
        let user_value = self.client.get_user(login).await?;
        let user: UserPayload = serde_json::from_value(user_value)
            .map_err(|err| FetchError::Decode(anyhow::Error::new(err)))?;
        let profile = normalize_user(&user);

        let mut events = Vec::new();
        for page in 1..=self.config.event_pages {
            let values = self
                .client
                .list_user_events(login, page, self.config.events_per_page)
                .await?;
            for value in values {
                match serde_json::from_value::<EventPayload>(value) {
                    Ok(payload) => events.push(normalize_event(&payload)),
                    Err(err) => warn!(%err, "skipping undecodable event"),
                }
            }
        }

        let mut repos = Vec::new();
        for value in self
            .client
            .list_user_repos(login, self.config.repo_limit)
            .await?
        {
            match serde_json::from_value::<RepoPayload>(value) {
                Ok(payload) => repos.push(normalize_repo(&payload)),
                Err(err) => warn!(%err, "skipping undecodable repository"),
            }
        }

        info!(
            login,
            events = events.len(),
            repos = repos.len(),
            "assembled activity dataset"
        );
        Ok(Dataset {
            profile,
            events,
            repos,
        })
    }
}
