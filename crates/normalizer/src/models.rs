use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single public action in a user's event feed, reduced to the fields the
/// stats pass reads. Anything the roast does not care about becomes
/// [`EventKind::Other`] but keeps its timestamp, since every event still
/// counts toward the hour histogram and the active-day streak.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub created_at: DateTime<Utc>,
    pub kind: EventKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum EventKind {
    Push {
        commit_count: u64,
        messages: Vec<String>,
    },
    Issues {
        action: IssueAction,
    },
    PullRequest {
        action: PullRequestAction,
    },
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IssueAction {
    Opened,
    Closed,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PullRequestAction {
    Opened,
    Closed { merged: bool },
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    pub full_name: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub login: String,
    pub avatar_url: String,
}
