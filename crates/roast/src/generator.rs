use crate::narrative::{NarrativeSlide, RoastNarrative, Verdict};
use crate::stats::StatsSummary;

const SPARSE_COMMITS: u64 = 20;
const EXCESSIVE_COMMITS: u64 = 1000;
const PROLIFIC_MERGES: u32 = 50;
const GHOST_COMMITS: u64 = 50;

/// Maps a [`StatsSummary`] to the four-slide roast plus verdict. Bundle
/// selection is pure threshold policy, so identical stats always yield an
/// identical narrative; which of a bundle's three phrasings gets shown is
/// the renderer's draw.
pub fn generate(stats: &StatsSummary) -> RoastNarrative {
    let slides = vec![
        commit_volume_slide(stats),
        issue_activity_slide(stats),
        pr_survival_slide(stats),
        commit_message_slide(stats),
    ];

    RoastNarrative {
        slides,
        final_verdict: final_verdict(stats),
    }
}

fn commit_volume_slide(stats: &StatsSummary) -> NarrativeSlide {
    let commits = stats.commits;
    let texts = if commits < SPARSE_COMMITS {
        vec![
            format!("You committed {commits} times. My grandma commits more code to her knitting patterns."),
            format!("Only {commits} commits? Did you forget your password for 11 months?"),
            "A quiet year. Too stealthy. Either you're a genius or you're unemployed.".to_string(),
        ]
    } else if commits > EXCESSIVE_COMMITS {
        vec![
            format!("{commits} commits. Go touch grass. Please."),
            format!("You pushed code {commits} times. Your keyboard must hate you."),
            "Productivity score: 100. Social life score: Error 404.".to_string(),
        ]
    } else {
        vec![
            format!("{commits} commits. Solid. Boring, but solid."),
            "You did the work. Nothing flashy. Just... work.".to_string(),
            "Consistency is key. You exist.".to_string(),
        ]
    };

    NarrativeSlide {
        title: "Commit Crimes".to_string(),
        text_variations: texts,
        stat: format!("{commits} Commits"),
    }
}

fn issue_activity_slide(stats: &StatsSummary) -> NarrativeSlide {
    // Saturate so the slide stays total even for a hand-built summary with
    // both counters near u32::MAX.
    let total = stats.issues_opened.saturating_add(stats.issues_closed);
    let texts = if total == 0 {
        vec![
            "Zero issues. Likely because you write zero code anyone uses.".to_string(),
            "No bugs reported? Or just no one cares enough to report them?".to_string(),
            "Clean sheet. Suspiciously clean.".to_string(),
        ]
    } else {
        vec![
            format!(
                "Opened {} cans of worms. Closed {}.",
                stats.issues_opened, stats.issues_closed
            ),
            format!("You love complaining. {} issues opened.", stats.issues_opened),
            "Bug hunter or bug breeder? You decide.".to_string(),
        ]
    };

    NarrativeSlide {
        title: "Bug Bodycount".to_string(),
        text_variations: texts,
        stat: format!("{total} Issues"),
    }
}

fn pr_survival_slide(stats: &StatsSummary) -> NarrativeSlide {
    let texts = if stats.pr_merged == 0 && stats.pr_opened > 0 {
        vec![
            format!("Output: {} PRs. Merged: 0. Ouch.", stats.pr_opened),
            "Rejected. Again. And again.".to_string(),
            "Your code is... controversial.".to_string(),
        ]
    } else if stats.pr_merged > PROLIFIC_MERGES {
        vec![
            format!(
                "Merged {} PRs. Send your team a thank you card.",
                stats.pr_merged
            ),
            "Ship it. Ship it good.".to_string(),
            "You merge more than a highway onramp.".to_string(),
        ]
    } else {
        vec![
            "Survival rate: Moderate. You're getting there.".to_string(),
            format!("Merged {} PRs. Not bad, kid.", stats.pr_merged),
            "Slow and steady wins the merge race.".to_string(),
        ]
    };

    NarrativeSlide {
        title: "PR Survival".to_string(),
        text_variations: texts,
        stat: format!("{} Merged / {} Opened", stats.pr_merged, stats.pr_opened),
    }
}

fn commit_message_slide(stats: &StatsSummary) -> NarrativeSlide {
    let worst = if stats.worst_commit_msg.is_empty() {
        "update"
    } else {
        stats.worst_commit_msg.as_str()
    };

    NarrativeSlide {
        title: "Commit Syntax".to_string(),
        text_variations: vec![
            format!("\"{worst}\" - Poet Laureate of the repository."),
            format!("Commit message: \"{worst}\". Very descriptive."),
            format!("When you wrote \"{worst}\", what were you feeling?"),
        ],
        stat: "Actual Commit Msg".to_string(),
    }
}

fn final_verdict(stats: &StatsSummary) -> Verdict {
    let summaries = if stats.commits < GHOST_COMMITS {
        vec![
            "The \"Ghost\". You were barely there.".to_string(),
            "Verdict: Lurker.".to_string(),
            "I've seen more activity in a cemetery.".to_string(),
        ]
    } else {
        vec![
            "You coded. You merged. You survived.".to_string(),
            "Verdict: Certified Developer.".to_string(),
            "Outcome: 10x Engineer (on a log scale).".to_string(),
        ]
    };

    Verdict {
        summary_variations: summaries,
    }
}
