use validator::Validate;

use crate::core::explain::{explain_match, Explanation};
use crate::core::filters::{matches_filters, NeighborhoodFilters};
use crate::core::scoring::{aggregate_score, SubScores};
use crate::core::MatchError;
use crate::models::{MatchingResult, Neighborhood, UserPreferences};

/// Overall 0-100 compatibility score for one neighborhood
pub fn score(preferences: &UserPreferences, neighborhood: &Neighborhood) -> Result<u8, MatchError> {
    validate_inputs(preferences, neighborhood)?;
    let sub_scores = SubScores::calculate(preferences, neighborhood);
    Ok(aggregate_score(&sub_scores, &preferences.priorities))
}

/// Match reasons, concerns, and recommendations for one neighborhood
pub fn explain(
    preferences: &UserPreferences,
    neighborhood: &Neighborhood,
) -> Result<Explanation, MatchError> {
    validate_inputs(preferences, neighborhood)?;
    Ok(explain_match(preferences, neighborhood))
}

/// Score and explain one neighborhood, producing a full matching result
pub fn match_neighborhood(
    preferences: &UserPreferences,
    neighborhood: &Neighborhood,
) -> Result<MatchingResult, MatchError> {
    validate_inputs(preferences, neighborhood)?;
    Ok(match_validated(preferences, neighborhood))
}

/// Score every neighborhood in the collection, one result per record.
///
/// Input order is preserved; use [`sort_by_compatibility`] to rank.
pub fn match_all(
    preferences: &UserPreferences,
    neighborhoods: &[Neighborhood],
) -> Result<Vec<MatchingResult>, MatchError> {
    validate_preferences(preferences)?;

    neighborhoods
        .iter()
        .map(|neighborhood| {
            validate_neighborhood(neighborhood)?;
            Ok(match_validated(preferences, neighborhood))
        })
        .collect()
}

/// Sort results by descending compatibility score.
///
/// Ranking is an explicit caller operation, never an implicit side effect of
/// scoring order. The sort is stable, so equal scores keep their input order.
pub fn sort_by_compatibility(results: &mut [MatchingResult]) {
    results.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));
}

/// Reject a malformed preference profile before any scoring happens
pub fn validate_preferences(preferences: &UserPreferences) -> Result<(), MatchError> {
    preferences
        .validate()
        .map_err(|e| MatchError::InvalidInput(format!("preferences: {e}")))?;
    if preferences.budget.min > preferences.budget.max {
        return Err(MatchError::InvalidInput(
            "preferences: budget min exceeds budget max".to_string(),
        ));
    }
    Ok(())
}

/// Reject a malformed neighborhood record before any scoring happens
pub fn validate_neighborhood(neighborhood: &Neighborhood) -> Result<(), MatchError> {
    neighborhood
        .validate()
        .map_err(|e| MatchError::InvalidInput(format!("neighborhood {}: {e}", neighborhood.id)))?;
    let demographics = &neighborhood.demographics;
    if demographics.age_distribution.total() > demographics.total_population {
        return Err(MatchError::InvalidInput(format!(
            "neighborhood {}: age buckets exceed total population",
            neighborhood.id
        )));
    }
    Ok(())
}

fn validate_inputs(
    preferences: &UserPreferences,
    neighborhood: &Neighborhood,
) -> Result<(), MatchError> {
    validate_preferences(preferences)?;
    validate_neighborhood(neighborhood)?;
    Ok(())
}

fn match_validated(preferences: &UserPreferences, neighborhood: &Neighborhood) -> MatchingResult {
    let sub_scores = SubScores::calculate(preferences, neighborhood);
    let compatibility_score = aggregate_score(&sub_scores, &preferences.priorities);
    let explanation = explain_match(preferences, neighborhood);

    MatchingResult {
        neighborhood: neighborhood.clone(),
        compatibility_score,
        match_reasons: explanation.reasons,
        concerns: explanation.concerns,
        recommendations: explanation.recommendations,
    }
}

/// Result of the recommendation pipeline
#[derive(Debug)]
pub struct RecommendationSet {
    pub results: Vec<MatchingResult>,
    pub total_candidates: usize,
}

/// Full recommendation pipeline used by the HTTP layer.
///
/// # Pipeline stages
/// 1. Attribute filtering (safety, walkability, crime, amenities, text query)
/// 2. Scoring and explanation per surviving neighborhood
/// 3. Ranking by descending compatibility
/// 4. Truncation to the requested limit
pub fn find_recommendations(
    preferences: &UserPreferences,
    neighborhoods: Vec<Neighborhood>,
    filters: &NeighborhoodFilters,
    limit: usize,
) -> Result<RecommendationSet, MatchError> {
    let total_candidates = neighborhoods.len();

    let candidates: Vec<Neighborhood> = neighborhoods
        .into_iter()
        .filter(|neighborhood| matches_filters(neighborhood, filters))
        .collect();

    let mut results = match_all(preferences, &candidates)?;
    sort_by_compatibility(&mut results);
    results.truncate(limit);

    Ok(RecommendationSet {
        results,
        total_candidates,
    })
}
