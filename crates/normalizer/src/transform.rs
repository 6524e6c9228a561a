use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::models::{Event, EventKind, IssueAction, PullRequestAction, Repository, UserProfile};
use crate::payloads::{EventPayload, IssueDetails, PullRequestDetails, PushDetails, RepoPayload, UserPayload};

pub fn normalize_event(payload: &EventPayload) -> Event {
    let kind = match payload.kind.as_str() {
        "PushEvent" => {
            let details: PushDetails = decode_details(&payload.payload);
            EventKind::Push {
                commit_count: details.size,
                messages: details.commits.into_iter().map(|c| c.message).collect(),
            }
        }
        "IssuesEvent" => {
            let details: IssueDetails = decode_details(&payload.payload);
            EventKind::Issues {
                action: match details.action.as_deref() {
                    Some("opened") => IssueAction::Opened,
                    Some("closed") => IssueAction::Closed,
                    _ => IssueAction::Other,
                },
            }
        }
        "PullRequestEvent" => {
            let details: PullRequestDetails = decode_details(&payload.payload);
            EventKind::PullRequest {
                action: match details.action.as_deref() {
                    Some("opened") => PullRequestAction::Opened,
                    Some("closed") => PullRequestAction::Closed {
                        merged: details.pull_request.map(|pr| pr.merged).unwrap_or(false),
                    },
                    _ => PullRequestAction::Other,
                },
            }
        }
        _ => EventKind::Other,
    };

    Event {
        created_at: payload.created_at,
        kind,
    }
}

pub fn normalize_repo(payload: &RepoPayload) -> Repository {
    Repository {
        full_name: payload.full_name.clone(),
        language: payload.language.clone().filter(|l| !l.is_empty()),
    }
}

pub fn normalize_user(payload: &UserPayload) -> UserProfile {
    UserProfile {
        login: payload.login.clone(),
        avatar_url: payload.avatar_url.clone(),
    }
}

// Payload shapes drift across event API versions; a payload that no longer
// decodes degrades to its zero value instead of dropping the event.
fn decode_details<T: DeserializeOwned + Default>(value: &Value) -> T {
    match serde_json::from_value(value.clone()) {
        Ok(details) => details,
        Err(err) => {
            debug!(%err, "undecodable event payload, using defaults");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn event(kind: &str, payload: Value) -> EventPayload {
        EventPayload {
            kind: kind.to_string(),
            created_at: Utc::now(),
            payload,
        }
    }

    #[test]
    fn push_event_keeps_size_and_messages() {
        let raw = event(
            "PushEvent",
            json!({
                "size": 3,
                "commits": [
                    {"sha": "a", "message": "fix"},
                    {"sha": "b", "message": "add parser"}
                ]
            }),
        );
        let normalized = normalize_event(&raw);
        assert_eq!(
            normalized.kind,
            EventKind::Push {
                commit_count: 3,
                messages: vec!["fix".into(), "add parser".into()],
            }
        );
    }

    #[test]
    fn push_event_without_commit_list_still_counts() {
        let raw = event("PushEvent", json!({"size": 5}));
        let normalized = normalize_event(&raw);
        assert_eq!(
            normalized.kind,
            EventKind::Push {
                commit_count: 5,
                messages: vec![],
            }
        );
    }

    #[test]
    fn issue_actions_map_to_enum() {
        let opened = normalize_event(&event("IssuesEvent", json!({"action": "opened"})));
        let closed = normalize_event(&event("IssuesEvent", json!({"action": "closed"})));
        let labeled = normalize_event(&event("IssuesEvent", json!({"action": "labeled"})));
        assert_eq!(
            opened.kind,
            EventKind::Issues {
                action: IssueAction::Opened
            }
        );
        assert_eq!(
            closed.kind,
            EventKind::Issues {
                action: IssueAction::Closed
            }
        );
        assert_eq!(
            labeled.kind,
            EventKind::Issues {
                action: IssueAction::Other
            }
        );
    }

    #[test]
    fn closed_pr_without_merge_flag_counts_as_unmerged() {
        let raw = event("PullRequestEvent", json!({"action": "closed"}));
        let normalized = normalize_event(&raw);
        assert_eq!(
            normalized.kind,
            EventKind::PullRequest {
                action: PullRequestAction::Closed { merged: false }
            }
        );
    }

    #[test]
    fn merged_pr_is_detected() {
        let raw = event(
            "PullRequestEvent",
            json!({"action": "closed", "pull_request": {"merged": true}}),
        );
        let normalized = normalize_event(&raw);
        assert_eq!(
            normalized.kind,
            EventKind::PullRequest {
                action: PullRequestAction::Closed { merged: true }
            }
        );
    }

    #[test]
    fn unknown_event_type_becomes_other() {
        let raw = event("WatchEvent", json!({"action": "started"}));
        assert_eq!(normalize_event(&raw).kind, EventKind::Other);
    }

    #[test]
    fn malformed_payload_degrades_to_defaults() {
        let raw = event("PushEvent", json!("not an object"));
        assert_eq!(
            normalize_event(&raw).kind,
            EventKind::Push {
                commit_count: 0,
                messages: vec![],
            }
        );
    }

    #[test]
    fn empty_language_is_dropped() {
        let repo = normalize_repo(&RepoPayload {
            full_name: "octocat/hello".into(),
            language: Some(String::new()),
        });
        assert_eq!(repo.language, None);
    }
}
