use crate::models::{AgeGroup, ActivityLevel, Neighborhood, Priorities, SocialPreference, UserPreferences};

/// Fraction of median income assumed to go toward housing
pub const HOUSING_COST_RATIO: f64 = 0.3;

/// Weight applied to a priority dimension the user did not set
pub const DEFAULT_PRIORITY_WEIGHT: f64 = 5.0;

/// Upper bound on a single priority weight
const MAX_PRIORITY_WEIGHT: f64 = 10.0;

/// The eight dimension scores feeding the weighted aggregate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub safety: f64,
    pub amenities: f64,
    pub transportation: f64,
    pub lifestyle: f64,
    pub affordability: f64,
    pub family_friendly: f64,
    pub nightlife: f64,
    pub quietness: f64,
}

impl SubScores {
    /// Compute all eight dimension scores for one neighborhood
    pub fn calculate(preferences: &UserPreferences, neighborhood: &Neighborhood) -> Self {
        Self {
            safety: calculate_safety_score(neighborhood),
            amenities: calculate_amenity_score(neighborhood),
            transportation: calculate_transportation_score(neighborhood),
            lifestyle: calculate_lifestyle_score(preferences, neighborhood),
            affordability: calculate_affordability_score(preferences, neighborhood),
            family_friendly: calculate_family_score(neighborhood),
            nightlife: calculate_nightlife_score(neighborhood),
            quietness: calculate_quietness_score(neighborhood),
        }
    }
}

/// Clamp a sub-score or lifestyle metric into the 0-100 contract.
///
/// Upstream metrics derived from raw amenity counts can exceed 100, so every
/// consumption site clamps rather than trusting the nominal range.
#[inline]
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Estimated monthly housing cost for a neighborhood
#[inline]
pub fn estimated_housing_cost(neighborhood: &Neighborhood) -> f64 {
    neighborhood.demographics.median_income * HOUSING_COST_RATIO
}

/// Safety score: provider safety score plus a low-crime bonus of up to 10
pub fn calculate_safety_score(neighborhood: &Neighborhood) -> f64 {
    let crime_rate = neighborhood.safety.crime_rate;
    let crime_bonus = ((50.0 - crime_rate) / 50.0).max(0.0) * 10.0;
    (neighborhood.safety.safety_score + crime_bonus).min(100.0)
}

/// Amenity score: total count normalized so 50+ amenities saturates at 100
pub fn calculate_amenity_score(neighborhood: &Neighborhood) -> f64 {
    let total = neighborhood.amenities.total() as f64;
    (total / 50.0 * 100.0).min(100.0)
}

/// Transportation score: weighted blend of walkability, transit, and bike scores
pub fn calculate_transportation_score(neighborhood: &Neighborhood) -> f64 {
    let transport = &neighborhood.transportation;
    (0.4 * transport.walkability_score + 0.3 * transport.transit_score + 0.3 * transport.bike_score)
        .round()
}

/// Lifestyle score: blend of age-group, activity-level, and social-preference fit
pub fn calculate_lifestyle_score(preferences: &UserPreferences, neighborhood: &Neighborhood) -> f64 {
    let age = age_group_compatibility(preferences.lifestyle.age_group, neighborhood);
    let activity = activity_compatibility(preferences.lifestyle.activity_level, neighborhood);
    let social = social_compatibility(preferences.lifestyle.social_preference, neighborhood);

    (age * 0.3 + activity * 0.3 + social * 0.4).round()
}

/// Share of the population in the user's age cohort, as a 0-100 percentage
fn age_group_compatibility(age_group: AgeGroup, neighborhood: &Neighborhood) -> f64 {
    if age_group == AgeGroup::Mixed {
        return 75.0;
    }

    let total = neighborhood.demographics.total_population;
    if total == 0 {
        return 0.0;
    }

    let dist = &neighborhood.demographics.age_distribution;
    let cohort = match age_group {
        AgeGroup::Young => dist.age_18_to_34,
        AgeGroup::Family => dist.age_35_to_49 + dist.under_18,
        AgeGroup::Senior => dist.over_65,
        AgeGroup::Mixed => unreachable!(),
    };

    cohort as f64 / total as f64 * 100.0
}

/// Fit between desired activity level and outdoor/cultural offerings
fn activity_compatibility(activity_level: ActivityLevel, neighborhood: &Neighborhood) -> f64 {
    let outdoor = clamp_score(neighborhood.lifestyle.outdoor_activities);
    let cultural = clamp_score(neighborhood.lifestyle.cultural_events);

    match activity_level {
        ActivityLevel::High => (outdoor + cultural) / 2.0,
        ActivityLevel::Medium => (outdoor + cultural + 50.0) / 3.0,
        ActivityLevel::Low => ((100.0 - outdoor) + (100.0 - cultural)) / 2.0,
    }
}

/// Fit between social preference and community/nightlife character
fn social_compatibility(social: SocialPreference, neighborhood: &Neighborhood) -> f64 {
    let community = clamp_score(neighborhood.lifestyle.community_engagement);
    let nightlife = clamp_score(neighborhood.lifestyle.nightlife);

    match social {
        SocialPreference::Extrovert => (community + nightlife) / 2.0,
        SocialPreference::Introvert => ((100.0 - community) + (100.0 - nightlife)) / 2.0,
        SocialPreference::Balanced => (community + (100.0 - nightlife)) / 2.0,
    }
}

/// Affordability score: tiered comparison of estimated housing cost vs budget
pub fn calculate_affordability_score(
    preferences: &UserPreferences,
    neighborhood: &Neighborhood,
) -> f64 {
    let cost = estimated_housing_cost(neighborhood);
    let budget = &preferences.budget;

    if cost >= budget.min && cost <= budget.max {
        100.0
    } else if cost <= budget.max * 1.2 {
        80.0
    } else if cost <= budget.max * 1.5 {
        50.0
    } else {
        20.0
    }
}

/// Family-friendliness: schools, parks/activities, and family population share
pub fn calculate_family_score(neighborhood: &Neighborhood) -> f64 {
    let amenities = &neighborhood.amenities;
    let school_points = (amenities.schools as f64 * 5.0).min(25.0);

    let family_activities = clamp_score(neighborhood.lifestyle.family_activities);
    let activity_points = ((amenities.parks as f64 + family_activities) * 2.0).min(25.0);

    let total = neighborhood.demographics.total_population;
    let family_fraction = if total == 0 {
        0.0
    } else {
        let dist = &neighborhood.demographics.age_distribution;
        (dist.under_18 + dist.age_35_to_49) as f64 / total as f64
    };

    school_points + activity_points + family_fraction * 50.0
}

/// Nightlife score: venue density plus the lifestyle nightlife metric
pub fn calculate_nightlife_score(neighborhood: &Neighborhood) -> f64 {
    let venues = (neighborhood.amenities.bars + neighborhood.amenities.restaurants) as f64;
    let venue_points = (venues * 2.0).min(40.0);
    let metric = clamp_score(neighborhood.lifestyle.nightlife);

    (venue_points + metric * 0.6).round()
}

/// Quietness score: inverse proxy for noise from nightlife and entertainment
pub fn calculate_quietness_score(neighborhood: &Neighborhood) -> f64 {
    let nightlife = clamp_score(neighborhood.lifestyle.nightlife);
    let entertainment = neighborhood.amenities.entertainment_venues as f64;

    (100.0 - (nightlife + entertainment) / 2.0).max(0.0).round()
}

/// Resolve a priority weight: absent defaults to 5, explicit zero (or any
/// non-positive value) excludes the dimension, values above 10 are capped.
#[inline]
fn effective_weight(weight: Option<f64>) -> f64 {
    match weight {
        Some(w) if w > 0.0 => w.min(MAX_PRIORITY_WEIGHT),
        Some(_) => 0.0,
        None => DEFAULT_PRIORITY_WEIGHT,
    }
}

/// Combine the eight sub-scores into one 0-100 compatibility score.
///
/// Each sub-score is clamped before weighting. If every weight resolves to
/// zero the aggregate falls back to the unweighted mean of the eight scores.
pub fn aggregate_score(scores: &SubScores, priorities: &Priorities) -> u8 {
    let weighted = [
        (scores.safety, priorities.safety),
        (scores.amenities, priorities.amenities),
        (scores.transportation, priorities.transportation),
        (scores.lifestyle, priorities.lifestyle),
        (scores.affordability, priorities.affordability),
        (scores.family_friendly, priorities.family_friendly),
        (scores.nightlife, priorities.nightlife),
        (scores.quietness, priorities.quietness),
    ];

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for (score, weight) in weighted {
        let w = effective_weight(weight);
        weighted_sum += clamp_score(score) * w;
        total_weight += w;
    }

    let aggregate = if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        weighted
            .iter()
            .map(|(score, _)| clamp_score(*score))
            .sum::<f64>()
            / weighted.len() as f64
    };

    aggregate.round().clamp(0.0, 100.0) as u8
}
