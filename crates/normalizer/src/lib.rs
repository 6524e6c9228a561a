pub mod models;
pub mod payloads;
pub mod transform;

pub use models::{Event, EventKind, IssueAction, PullRequestAction, Repository, UserProfile};
pub use payloads::{EventPayload, RepoPayload, UserPayload};
pub use transform::{normalize_event, normalize_repo, normalize_user};
