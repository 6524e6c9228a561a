use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// One entry from `GET /users/{login}/events`. The `payload` shape depends on
/// `type`, so it stays raw here and is decoded per kind during normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct EventPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushDetails {
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub commits: Vec<CommitLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitLine {
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueDetails {
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestDetails {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub pull_request: Option<PullRequestRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestRef {
    #[serde(default)]
    pub merged: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoPayload {
    pub full_name: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
}
