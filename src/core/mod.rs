pub mod explain;
pub mod filters;
pub mod matcher;
pub mod scoring;

use thiserror::Error;

/// Errors raised by the scoring engine
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub use explain::Explanation;
pub use filters::NeighborhoodFilters;
pub use matcher::{
    explain, find_recommendations, match_all, match_neighborhood, score, sort_by_compatibility,
    validate_neighborhood, validate_preferences, RecommendationSet,
};
pub use scoring::SubScores;
