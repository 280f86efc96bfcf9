use crate::core::scoring::{clamp_score, estimated_housing_cost};
use crate::models::{ActivityLevel, AgeGroup, Neighborhood, UserPreferences};

/// Human-readable explanation of a compatibility score
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Explanation {
    pub reasons: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Derive match reasons, concerns, and recommendations from threshold rules.
///
/// Each rule fires independently of the aggregate score. Rules are evaluated
/// in a fixed order so output order is deterministic.
pub fn explain_match(preferences: &UserPreferences, neighborhood: &Neighborhood) -> Explanation {
    let mut explanation = Explanation::default();

    let safety_score = neighborhood.safety.safety_score;
    let amenity_total = neighborhood.amenities.total();
    let walkability = neighborhood.transportation.walkability_score;

    if safety_score > 80.0 {
        explanation
            .reasons
            .push("Excellent safety record".to_string());
    }
    if amenity_total > 30 {
        explanation
            .reasons
            .push("Abundant amenities and services".to_string());
    }
    if walkability > 70.0 {
        explanation.reasons.push("Highly walkable area".to_string());
    }
    if preferences.lifestyle.age_group == AgeGroup::Family && neighborhood.demographics.family_friendly
    {
        explanation
            .reasons
            .push("Family-friendly community".to_string());
    }

    if neighborhood.safety.crime_rate > 30.0 {
        explanation
            .concerns
            .push("Higher than average crime rate".to_string());
    }
    if estimated_housing_cost(neighborhood) > preferences.budget.max {
        explanation
            .concerns
            .push("Housing costs may exceed budget".to_string());
    }
    if walkability < 30.0 {
        explanation.concerns.push("Limited walkability".to_string());
    }

    if walkability < 50.0 {
        explanation
            .recommendations
            .push("Consider alternate transportation for daily travel".to_string());
    }
    if safety_score < 70.0 {
        explanation
            .recommendations
            .push("Research local safety measures and community programs".to_string());
    }
    if preferences.lifestyle.activity_level == ActivityLevel::High
        && clamp_score(neighborhood.lifestyle.outdoor_activities) < 50.0
    {
        explanation
            .recommendations
            .push("Look for nearby parks and recreation facilities".to_string());
    }

    explanation
}
