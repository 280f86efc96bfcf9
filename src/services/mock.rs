use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{
    AgeDistribution, Amenities, Demographics, EducationLevel, LifestyleMetrics, Location,
    Neighborhood, NeighborhoodScores, ParkingAvailability, SafetyMetrics, TransportationInfo,
};

const NEIGHBORHOOD_NAMES: &[&str] = &[
    "Riverside",
    "Oak Hill",
    "Maplewood",
    "Pearl District",
    "Harbor Point",
    "Cedar Heights",
    "Old Town",
    "Sunnyside",
    "Brookfield",
    "Willow Glen",
    "Highland Park",
    "Fairview",
    "Stonegate",
    "Meadowbrook",
    "Elm Park",
    "Arbor Vale",
];

/// Deterministic mock neighborhood generator.
///
/// Used as a fallback when no places API is configured or reachable. The seed
/// is passed explicitly so the same seed and center always produce the same
/// records, which keeps tests and local development reproducible.
pub struct MockNeighborhoodGenerator {
    rng: StdRng,
}

impl MockNeighborhoodGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `count` neighborhoods scattered around the given center
    pub fn generate(&mut self, center: &Location, count: usize) -> Vec<Neighborhood> {
        (0..count).map(|i| self.generate_one(center, i)).collect()
    }

    fn generate_one(&mut self, center: &Location, index: usize) -> Neighborhood {
        let base_name = NEIGHBORHOOD_NAMES[index % NEIGHBORHOOD_NAMES.len()];
        let name = if index < NEIGHBORHOOD_NAMES.len() {
            base_name.to_string()
        } else {
            format!("{} {}", base_name, index / NEIGHBORHOOD_NAMES.len() + 1)
        };

        let total_population = self.rng.gen_range(2000..20000);
        let under_18 = (total_population as f64 * self.rng.gen_range(0.10..0.22)) as u32;
        let age_18_to_34 = (total_population as f64 * self.rng.gen_range(0.15..0.28)) as u32;
        let age_35_to_49 = (total_population as f64 * self.rng.gen_range(0.15..0.25)) as u32;
        let age_50_to_64 = (total_population as f64 * self.rng.gen_range(0.10..0.18)) as u32;
        let over_65 = total_population - under_18 - age_18_to_34 - age_35_to_49 - age_50_to_64;

        let amenities = Amenities {
            restaurants: self.rng.gen_range(0..25),
            cafes: self.rng.gen_range(0..12),
            bars: self.rng.gen_range(0..10),
            grocery_stores: self.rng.gen_range(1..6),
            parks: self.rng.gen_range(0..8),
            gyms: self.rng.gen_range(0..5),
            schools: self.rng.gen_range(0..6),
            hospitals: self.rng.gen_range(0..3),
            shopping_centers: self.rng.gen_range(0..4),
            entertainment_venues: self.rng.gen_range(0..8),
        };

        // Derived from raw venue counts, so dense areas can exceed 100; the
        // scoring engine clamps at consumption.
        let nightlife = (amenities.bars + amenities.restaurants) as f64 * 3.0;

        let safety_score = self.rng.gen_range(30.0..95.0);
        let crime_rate = self.rng.gen_range(2.0..60.0);
        let walkability_score = self.rng.gen_range(20.0..95.0);
        let transit_score = self.rng.gen_range(20.0..95.0);
        let bike_score = self.rng.gen_range(15.0..90.0);
        let median_income = self.rng.gen_range(35000.0..150000.0);

        let lifestyle = LifestyleMetrics {
            nightlife,
            family_activities: self.rng.gen_range(20.0..90.0),
            outdoor_activities: self.rng.gen_range(20.0..90.0),
            cultural_events: self.rng.gen_range(15.0..85.0),
            community_engagement: self.rng.gen_range(20.0..90.0),
        };

        let scores = NeighborhoodScores {
            overall: (safety_score + walkability_score) / 2.0,
            safety: safety_score,
            amenities: (amenities.total() as f64 * 2.0).min(100.0),
            transportation: walkability_score,
            lifestyle: lifestyle.outdoor_activities,
            affordability: (150000.0 - median_income) / 1500.0,
        };

        Neighborhood {
            id: format!("mock-{index}"),
            name,
            location: Location {
                latitude: center.latitude + self.rng.gen_range(-0.05..0.05),
                longitude: center.longitude + self.rng.gen_range(-0.05..0.05),
                address: None,
                city: center.city.clone(),
                state: center.state.clone(),
                postal_code: None,
            },
            demographics: Demographics {
                total_population,
                median_age: self.rng.gen_range(28.0..48.0),
                median_income,
                diversity_index: self.rng.gen_range(30.0..95.0),
                education_level: match self.rng.gen_range(0..3) {
                    0 => EducationLevel::High,
                    1 => EducationLevel::Medium,
                    _ => EducationLevel::Low,
                },
                family_friendly: self.rng.gen_bool(0.5),
                age_distribution: AgeDistribution {
                    under_18,
                    age_18_to_34,
                    age_35_to_49,
                    age_50_to_64,
                    over_65,
                },
            },
            amenities,
            safety: SafetyMetrics {
                crime_rate,
                safety_score,
                police_stations: self.rng.gen_range(0..4),
                emergency_services: self.rng.gen_range(1..6),
                well_lit_streets: self.rng.gen_bool(0.7),
            },
            transportation: TransportationInfo {
                walkability_score,
                transit_score,
                bike_score,
                public_transit_stops: self.rng.gen_range(0..30),
                bike_lanes: self.rng.gen_range(0..20),
                parking_availability: match self.rng.gen_range(0..3) {
                    0 => ParkingAvailability::High,
                    1 => ParkingAvailability::Medium,
                    _ => ParkingAvailability::Low,
                },
            },
            lifestyle,
            scores,
            last_updated: chrono::Utc::now(),
        }
    }
}
