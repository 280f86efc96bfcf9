// Integration tests for Haven Algo

use haven_algo::core::{find_recommendations, NeighborhoodFilters};
use haven_algo::models::*;
use haven_algo::services::{MockNeighborhoodGenerator, NeighborhoodProvider, PreferenceStore};

fn portland() -> Location {
    Location {
        latitude: 45.52,
        longitude: -122.68,
        address: None,
        city: Some("Portland".to_string()),
        state: Some("OR".to_string()),
        postal_code: None,
    }
}

fn create_test_preferences() -> UserPreferences {
    UserPreferences {
        user_id: "current_user".to_string(),
        location: portland(),
        budget: BudgetRange {
            min: 12000.0,
            max: 30000.0,
        },
        priorities: Priorities {
            safety: Some(9.0),
            affordability: Some(8.0),
            nightlife: Some(2.0),
            ..Priorities::default()
        },
        lifestyle: LifestyleProfile {
            age_group: AgeGroup::Family,
            activity_level: ActivityLevel::Medium,
            social_preference: SocialPreference::Balanced,
            work_style: WorkStyle::Hybrid,
        },
        must_haves: vec!["parks".to_string()],
        deal_breakers: vec![],
    }
}

#[test]
fn test_end_to_end_recommendations_over_mock_data() {
    let preferences = create_test_preferences();
    let neighborhoods = MockNeighborhoodGenerator::new(42).generate(&portland(), 24);

    let set = find_recommendations(
        &preferences,
        neighborhoods,
        &NeighborhoodFilters::default(),
        10,
    )
    .unwrap();

    assert_eq!(set.total_candidates, 24);
    assert_eq!(set.results.len(), 10);

    // Ranked by descending compatibility
    for pair in set.results.windows(2) {
        assert!(pair[0].compatibility_score >= pair[1].compatibility_score);
    }

    // Every score honors the 0-100 contract even with out-of-range mock metrics
    for result in &set.results {
        assert!(result.compatibility_score <= 100);
    }
}

#[test]
fn test_pipeline_is_deterministic_for_a_fixed_seed() {
    let preferences = create_test_preferences();

    let run = || {
        let neighborhoods = MockNeighborhoodGenerator::new(7).generate(&portland(), 16);
        find_recommendations(
            &preferences,
            neighborhoods,
            &NeighborhoodFilters::default(),
            16,
        )
        .unwrap()
    };

    let first = run();
    let second = run();

    let ids = |set: &haven_algo::core::RecommendationSet| -> Vec<(String, u8)> {
        set.results
            .iter()
            .map(|r| (r.neighborhood.id.clone(), r.compatibility_score))
            .collect()
    };

    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn test_filters_narrow_the_candidate_set() {
    let preferences = create_test_preferences();
    let neighborhoods = MockNeighborhoodGenerator::new(42).generate(&portland(), 24);

    let strict = NeighborhoodFilters {
        min_safety_score: Some(60.0),
        max_crime_rate: Some(40.0),
        ..NeighborhoodFilters::default()
    };

    let unfiltered = find_recommendations(
        &preferences,
        neighborhoods.clone(),
        &NeighborhoodFilters::default(),
        100,
    )
    .unwrap();
    let filtered = find_recommendations(&preferences, neighborhoods, &strict, 100).unwrap();

    assert!(filtered.results.len() <= unfiltered.results.len());
    for result in &filtered.results {
        assert!(result.neighborhood.safety.safety_score >= 60.0);
        assert!(result.neighborhood.safety.crime_rate <= 40.0);
    }
}

#[test]
fn test_text_query_filter() {
    let preferences = create_test_preferences();
    let neighborhoods = MockNeighborhoodGenerator::new(42).generate(&portland(), 16);

    let filters = NeighborhoodFilters {
        query: Some("riverside".to_string()),
        ..NeighborhoodFilters::default()
    };

    let set = find_recommendations(&preferences, neighborhoods, &filters, 100).unwrap();
    assert!(!set.results.is_empty());
    for result in &set.results {
        let name_hit = result.neighborhood.name.to_lowercase().contains("riverside");
        let city_hit = result
            .neighborhood
            .location
            .city
            .as_ref()
            .map(|c| c.to_lowercase().contains("riverside"))
            .unwrap_or(false);
        assert!(name_hit || city_hit);
    }
}

#[test]
fn test_explanations_attached_to_results() {
    let preferences = create_test_preferences();
    let neighborhoods = MockNeighborhoodGenerator::new(42).generate(&portland(), 24);

    let set = find_recommendations(
        &preferences,
        neighborhoods,
        &NeighborhoodFilters::default(),
        24,
    )
    .unwrap();

    // With 24 varied neighborhoods at least one rule should fire somewhere
    let any_reason = set.results.iter().any(|r| !r.match_reasons.is_empty());
    let any_concern = set.results.iter().any(|r| !r.concerns.is_empty());
    assert!(any_reason || any_concern);
}

#[tokio::test]
async fn test_provider_and_store_wiring() {
    let provider = NeighborhoodProvider::new(None, None, 5, 100, 300, 42, 12).unwrap();
    let store = PreferenceStore::new();

    let preferences = create_test_preferences();
    store.put(preferences.clone()).await;

    let stored = store.get("current_user").await.unwrap();
    let neighborhoods = provider
        .get_neighborhoods(&stored.location, 10.0)
        .await
        .unwrap();

    let set = find_recommendations(
        &stored,
        neighborhoods.as_ref().clone(),
        &NeighborhoodFilters::default(),
        5,
    )
    .unwrap();

    assert_eq!(set.results.len(), 5);
    assert_eq!(set.total_candidates, 12);
}

#[test]
fn test_matching_result_serializes_with_camel_case() {
    let preferences = create_test_preferences();
    let neighborhoods = MockNeighborhoodGenerator::new(42).generate(&portland(), 1);

    let set = find_recommendations(
        &preferences,
        neighborhoods,
        &NeighborhoodFilters::default(),
        1,
    )
    .unwrap();

    let json = serde_json::to_value(&set.results[0]).unwrap();
    assert!(json.get("compatibilityScore").is_some());
    assert!(json.get("matchReasons").is_some());
    assert!(json["neighborhood"]["demographics"].get("totalPopulation").is_some());
}
