//! Haven Algo - Neighborhood compatibility matching service for the Haven home-search app
//!
//! This library provides the compatibility scoring engine used by the Haven app.
//! It scores neighborhoods against a user preference profile across eight
//! dimensions, aggregates them by user priority weights, and explains each score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    explain, find_recommendations, match_all, match_neighborhood, score, sort_by_compatibility,
    Explanation, MatchError, NeighborhoodFilters, SubScores,
};
pub use crate::models::{MatchingResult, Neighborhood, UserPreferences};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let filters = NeighborhoodFilters::default();
        assert!(filters.min_safety_score.is_none());
    }
}
