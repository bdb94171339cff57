// Core heuristics exports
pub mod presenter;
pub mod profile;
pub mod showcase;
pub mod synthesizer;

pub use presenter::{present_listings, MatchPresenter, PlaceholderPresenter};
pub use profile::ProfileScorer;
pub use showcase::{dashboard_stats, sample_candidates};
pub use synthesizer::{classify, synthesize};
