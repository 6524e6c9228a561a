use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One themed roast slide. `text_variations` always holds three phrasings of
/// the same joke with the numbers already interpolated; the renderer picks
/// one at display time so a re-roll never recomputes the narrative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NarrativeSlide {
    pub title: String,
    pub text_variations: Vec<String>,
    pub stat: String,
}

impl NarrativeSlide {
    pub fn pick<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> &'a str {
        self.text_variations
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verdict {
    pub summary_variations: Vec<String>,
}

impl Verdict {
    pub fn pick<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> &'a str {
        self.summary_variations
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Four slides in fixed order plus the closing verdict. The verdict is its
/// own field, not a fifth slide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoastNarrative {
    pub slides: Vec<NarrativeSlide>,
    pub final_verdict: Verdict,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pick_is_stable_for_a_seed() {
        let slide = NarrativeSlide {
            title: "Commit Crimes".into(),
            text_variations: vec!["a".into(), "b".into(), "c".into()],
            stat: "3 Commits".into(),
        };
        let first = slide.pick(&mut StdRng::seed_from_u64(9)).to_string();
        let second = slide.pick(&mut StdRng::seed_from_u64(9)).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn pick_returns_one_of_the_variations() {
        let verdict = Verdict {
            summary_variations: vec!["x".into(), "y".into(), "z".into()],
        };
        let mut rng = StdRng::seed_from_u64(1);
        let picked = verdict.pick(&mut rng);
        assert!(verdict.summary_variations.iter().any(|v| v == picked));
    }
}
