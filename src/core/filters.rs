use serde::{Deserialize, Serialize};

use crate::models::Neighborhood;

/// Caller-supplied neighborhood filters.
///
/// All criteria are optional; an unset criterion never excludes a record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NeighborhoodFilters {
    #[serde(rename = "minSafetyScore", default)]
    pub min_safety_score: Option<f64>,
    #[serde(rename = "minWalkability", default)]
    pub min_walkability: Option<f64>,
    #[serde(rename = "maxCrimeRate", default)]
    pub max_crime_rate: Option<f64>,
    #[serde(rename = "minAmenities", default)]
    pub min_amenities: Option<u32>,
    /// Case-insensitive substring match against name or city
    #[serde(default)]
    pub query: Option<String>,
}

/// Check whether a neighborhood passes every set filter criterion
pub fn matches_filters(neighborhood: &Neighborhood, filters: &NeighborhoodFilters) -> bool {
    if let Some(min_safety) = filters.min_safety_score {
        if neighborhood.safety.safety_score < min_safety {
            return false;
        }
    }

    if let Some(min_walk) = filters.min_walkability {
        if neighborhood.transportation.walkability_score < min_walk {
            return false;
        }
    }

    if let Some(max_crime) = filters.max_crime_rate {
        if neighborhood.safety.crime_rate > max_crime {
            return false;
        }
    }

    if let Some(min_amenities) = filters.min_amenities {
        if neighborhood.amenities.total() < min_amenities {
            return false;
        }
    }

    if let Some(query) = &filters.query {
        let needle = query.to_lowercase();
        let name_match = neighborhood.name.to_lowercase().contains(&needle);
        let city_match = neighborhood
            .location
            .city
            .as_ref()
            .is_some_and(|city| city.to_lowercase().contains(&needle));
        if !name_match && !city_match {
            return false;
        }
    }

    true
}
