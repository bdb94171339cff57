//! ImpactMatch - pairs volunteers with association missions
//!
//! The heuristic core (profile analysis, mission drafting, match
//! presentation) is pure and lives in [`core`]. Storage, sessions and the
//! HTTP API wrap it.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{synthesize, MatchPresenter, PlaceholderPresenter, ProfileScorer};
pub use error::ApiError;
pub use models::{Analysis, MatchResult, MissionDraft, Profile};
pub use routes::AppState;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let analysis = ProfileScorer::default().score(&Profile::default());
        assert_eq!(analysis.score, 60);
    }
}
