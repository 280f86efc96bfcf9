use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::filters::NeighborhoodFilters;
use crate::models::domain::UserPreferences;

/// Request to find neighborhood recommendations.
///
/// Preferences may be supplied inline or referenced by `userId` against the
/// preference store; inline preferences take precedence.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindRecommendationsRequest {
    #[serde(alias = "user_id", rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
    #[serde(default)]
    pub filters: NeighborhoodFilters,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: u16,
    /// Search radius around the preferred location, in kilometers
    #[validate(range(min = 0.1, max = 100.0))]
    #[serde(rename = "radiusKm", default = "default_radius_km")]
    pub radius_km: f64,
}

fn default_limit() -> u16 {
    20
}

fn default_radius_km() -> f64 {
    10.0
}
