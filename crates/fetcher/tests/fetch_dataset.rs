use std::sync::Arc;

use async_trait::async_trait;
use common::config::FetcherConfig;
use fetcher::{FetchError, GithubClient, ProfileFetcher};
use normalizer::models::EventKind;
use serde_json::{json, Value};

struct StubClient;

#[async_trait]
impl GithubClient for StubClient {
    async fn get_user(&self, login: &str) -> Result<Value, FetchError> {
        Ok(json!({
            "login": login,
            "avatar_url": "https://avatars.example/octocat.png"
        }))
    }

    async fn list_user_events(
        &self,
        _login: &str,
        page: u32,
        _per_page: u32,
    ) -> Result<Vec<Value>, FetchError> {
        match page {
            1 => Ok(vec![
                json!({
                    "type": "PushEvent",
                    "created_at": "2024-04-02T08:00:00Z",
                    "payload": {"size": 2, "commits": [{"sha": "a", "message": "fix"}]}
                }),
                json!({
                    "type": "IssuesEvent",
                    "created_at": "2024-04-01T19:00:00Z",
                    "payload": {"action": "opened"}
                }),
                // No created_at: undecodable, must be skipped.
                json!({"type": "PushEvent", "payload": {"size": 9}}),
            ]),
            2 => Ok(vec![json!({
                "type": "WatchEvent",
                "created_at": "2024-03-20T12:00:00Z",
                "payload": {"action": "started"}
            })]),
            _ => Ok(vec![]),
        }
    }

    async fn list_user_repos(&self, _login: &str, _limit: u32) -> Result<Vec<Value>, FetchError> {
        Ok(vec![
            json!({"full_name": "octocat/hello", "language": "Rust"}),
            json!({"full_name": "octocat/dotfiles", "language": null}),
        ])
    }
}

struct NotFoundClient;

#[async_trait]
impl GithubClient for NotFoundClient {
    async fn get_user(&self, _login: &str) -> Result<Value, FetchError> {
        Err(FetchError::NotFound)
    }

    async fn list_user_events(
        &self,
        _login: &str,
        _page: u32,
        _per_page: u32,
    ) -> Result<Vec<Value>, FetchError> {
        unreachable!("events must not be fetched for a missing user")
    }

    async fn list_user_repos(&self, _login: &str, _limit: u32) -> Result<Vec<Value>, FetchError> {
        unreachable!("repos must not be fetched for a missing user")
    }
}

struct RateLimitedClient;

#[async_trait]
impl GithubClient for RateLimitedClient {
    async fn get_user(&self, login: &str) -> Result<Value, FetchError> {
        Ok(json!({"login": login, "avatar_url": ""}))
    }

    async fn list_user_events(
        &self,
        _login: &str,
        _page: u32,
        _per_page: u32,
    ) -> Result<Vec<Value>, FetchError> {
        Err(FetchError::RateLimited)
    }

    async fn list_user_repos(&self, _login: &str, _limit: u32) -> Result<Vec<Value>, FetchError> {
        Ok(vec![])
    }
}

#[tokio::test]
async fn dataset_concatenates_pages_and_skips_bad_entries() {
    let fetcher = ProfileFetcher::new(Arc::new(StubClient), FetcherConfig::default());
    let dataset = fetcher.fetch_dataset("octocat").await.expect("dataset");

    assert_eq!(dataset.profile.login, "octocat");
    // Two decodable events from page 1, one from page 2, one skipped.
    assert_eq!(dataset.events.len(), 3);
    assert!(matches!(
        dataset.events[0].kind,
        EventKind::Push { commit_count: 2, .. }
    ));
    assert_eq!(dataset.events[2].kind, EventKind::Other);
    assert_eq!(dataset.repos.len(), 2);
    assert_eq!(dataset.repos[0].language.as_deref(), Some("Rust"));
    assert_eq!(dataset.repos[1].language, None);
}

#[tokio::test]
async fn missing_user_short_circuits_before_events() {
    let fetcher = ProfileFetcher::new(Arc::new(NotFoundClient), FetcherConfig::default());
    let err = fetcher.fetch_dataset("ghost").await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound));
}

#[tokio::test]
async fn rate_limit_during_events_propagates_class() {
    let fetcher = ProfileFetcher::new(Arc::new(RateLimitedClient), FetcherConfig::default());
    let err = fetcher.fetch_dataset("busy").await.unwrap_err();
    assert!(matches!(err, FetchError::RateLimited));
}
