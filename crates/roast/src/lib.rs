pub mod generator;
pub mod narrative;
pub mod stats;

pub use generator::generate;
pub use narrative::{NarrativeSlide, RoastNarrative, Verdict};
pub use stats::{process, StatsSummary};
