use std::collections::{BTreeMap, HashSet};

use chrono::Timelike;
use normalizer::models::{Event, EventKind, IssueAction, PullRequestAction, Repository};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WORST_COMMIT: &str = "Fixed stuff";

// Substring match against the lowercased message. The bare "." is carried
// over from the original keyword list: any message containing a period
// qualifies, and that is load-bearing for how often the commit slide lands.
const BAD_KEYWORDS: &[&str] = &["fix", "oops", "damn", "wip", "test", "temp", "."];

const SHORT_MESSAGE_LIMIT: usize = 10;

/// Fixed-shape reduction of a user's recent activity. Counters only go up
/// during the single event pass; once returned the summary is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsSummary {
    pub commits: u64,
    pub issues_opened: u32,
    pub issues_closed: u32,
    pub pr_opened: u32,
    pub pr_merged: u32,
    pub pr_closed: u32,
    pub worst_commit_msg: String,
    pub commit_hours: BTreeMap<u8, u32>,
    pub languages: BTreeMap<String, u32>,
    pub streak: u32,
}

impl Default for StatsSummary {
    fn default() -> Self {
        Self {
            commits: 0,
            issues_opened: 0,
            issues_closed: 0,
            pr_opened: 0,
            pr_merged: 0,
            pr_closed: 0,
            worst_commit_msg: DEFAULT_WORST_COMMIT.to_string(),
            commit_hours: BTreeMap::new(),
            languages: BTreeMap::new(),
            streak: 0,
        }
    }
}

/// Reduces an event feed and repository list to a [`StatsSummary`].
///
/// Hour-of-day and calendar date are taken from the event's UTC timestamp,
/// so `commit_hours` and `streak` are reproducible regardless of where this
/// runs. The only random draw is the worst-commit pick among equally "bad"
/// candidates; everything else is deterministic in the input.
pub fn process<R: Rng + ?Sized>(
    events: &[Event],
    repos: &[Repository],
    rng: &mut R,
) -> StatsSummary {
    let mut stats = StatsSummary::default();
    if events.is_empty() {
        return stats;
    }

    let mut active_days = HashSet::new();
    let mut messages: Vec<&str> = Vec::new();

    for event in events {
        let hour = event.created_at.hour() as u8;
        *stats.commit_hours.entry(hour).or_insert(0) += 1;
        active_days.insert(event.created_at.date_naive());

        match &event.kind {
            EventKind::Push {
                commit_count,
                messages: pushed,
            } => {
                stats.commits += commit_count;
                messages.extend(pushed.iter().map(String::as_str));
            }
            EventKind::Issues { action } => match action {
                IssueAction::Opened => stats.issues_opened += 1,
                IssueAction::Closed => stats.issues_closed += 1,
                IssueAction::Other => {}
            },
            EventKind::PullRequest { action } => match action {
                PullRequestAction::Opened => stats.pr_opened += 1,
                PullRequestAction::Closed { merged: true } => stats.pr_merged += 1,
                PullRequestAction::Closed { merged: false } => stats.pr_closed += 1,
                PullRequestAction::Other => {}
            },
            EventKind::Other => {}
        }
    }

    for repo in repos {
        if let Some(language) = repo.language.as_deref().filter(|l| !l.is_empty()) {
            *stats.languages.entry(language.to_string()).or_insert(0) += 1;
        }
    }

    stats.streak = active_days.len() as u32;
    stats.worst_commit_msg = pick_worst_commit(&messages, rng);
    stats
}

fn pick_worst_commit<R: Rng + ?Sized>(messages: &[&str], rng: &mut R) -> String {
    let bad: Vec<&str> = messages.iter().copied().filter(|m| is_bad(m)).collect();
    if let Some(pick) = bad.choose(rng) {
        (*pick).to_string()
    } else if let Some(first) = messages.first() {
        (*first).to_string()
    } else {
        DEFAULT_WORST_COMMIT.to_string()
    }
}

fn is_bad(message: &str) -> bool {
    if message.chars().count() < SHORT_MESSAGE_LIMIT {
        return true;
    }
    let lower = message.to_lowercase();
    BAD_KEYWORDS.iter().any(|kw| lower.contains(kw))
}
