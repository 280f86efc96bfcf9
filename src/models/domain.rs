use serde::{Deserialize, Serialize};
use validator::Validate;

/// Geographic location with optional postal details
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(rename = "postalCode", default)]
    pub postal_code: Option<String>,
}

/// Population breakdown by age bracket
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AgeDistribution {
    #[serde(rename = "under18")]
    pub under_18: u32,
    #[serde(rename = "age18to34")]
    pub age_18_to_34: u32,
    #[serde(rename = "age35to49")]
    pub age_35_to_49: u32,
    #[serde(rename = "age50to64")]
    pub age_50_to_64: u32,
    #[serde(rename = "over65")]
    pub over_65: u32,
}

impl AgeDistribution {
    pub fn total(&self) -> u32 {
        self.under_18 + self.age_18_to_34 + self.age_35_to_49 + self.age_50_to_64 + self.over_65
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    High,
    Medium,
    Low,
}

/// Neighborhood demographic profile.
///
/// The age buckets should sum to at most the total population; the scoring
/// engine rejects records where they do not.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Demographics {
    #[serde(rename = "totalPopulation")]
    pub total_population: u32,
    #[serde(rename = "medianAge")]
    #[validate(range(min = 0.0))]
    pub median_age: f64,
    #[serde(rename = "medianIncome")]
    #[validate(range(min = 0.0))]
    pub median_income: f64,
    #[serde(rename = "diversityIndex")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub diversity_index: f64,
    #[serde(rename = "educationLevel")]
    pub education_level: EducationLevel,
    #[serde(rename = "familyFriendly")]
    pub family_friendly: bool,
    #[serde(rename = "ageDistribution", default)]
    pub age_distribution: AgeDistribution,
}

/// Amenity counts within the neighborhood boundary
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Amenities {
    pub restaurants: u32,
    pub cafes: u32,
    pub bars: u32,
    #[serde(rename = "groceryStores")]
    pub grocery_stores: u32,
    pub parks: u32,
    pub gyms: u32,
    pub schools: u32,
    pub hospitals: u32,
    #[serde(rename = "shoppingCenters")]
    pub shopping_centers: u32,
    #[serde(rename = "entertainmentVenues")]
    pub entertainment_venues: u32,
}

impl Amenities {
    /// Total count across all ten amenity categories
    pub fn total(&self) -> u32 {
        self.restaurants
            + self.cafes
            + self.bars
            + self.grocery_stores
            + self.parks
            + self.gyms
            + self.schools
            + self.hospitals
            + self.shopping_centers
            + self.entertainment_venues
    }
}

/// Crime and emergency service metrics
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SafetyMetrics {
    /// Incidents per 1000 residents
    #[serde(rename = "crimeRate")]
    #[validate(range(min = 0.0))]
    pub crime_rate: f64,
    #[serde(rename = "safetyScore")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub safety_score: f64,
    #[serde(rename = "policeStations")]
    pub police_stations: u32,
    #[serde(rename = "emergencyServices")]
    pub emergency_services: u32,
    #[serde(rename = "wellLitStreets")]
    pub well_lit_streets: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParkingAvailability {
    High,
    Medium,
    Low,
}

/// Walkability and transit metrics
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransportationInfo {
    #[serde(rename = "walkabilityScore")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub walkability_score: f64,
    #[serde(rename = "transitScore")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub transit_score: f64,
    #[serde(rename = "bikeScore")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub bike_score: f64,
    #[serde(rename = "publicTransitStops")]
    pub public_transit_stops: u32,
    #[serde(rename = "bikeLanes")]
    pub bike_lanes: u32,
    #[serde(rename = "parkingAvailability")]
    pub parking_availability: ParkingAvailability,
}

/// Lifestyle activity metrics.
///
/// Nominally 0-100, but upstream derivation from raw amenity counts can push
/// individual metrics above 100; the engine clamps at each use site.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LifestyleMetrics {
    #[validate(range(min = 0.0))]
    pub nightlife: f64,
    #[serde(rename = "familyActivities")]
    #[validate(range(min = 0.0))]
    pub family_activities: f64,
    #[serde(rename = "outdoorActivities")]
    #[validate(range(min = 0.0))]
    pub outdoor_activities: f64,
    #[serde(rename = "culturalEvents")]
    #[validate(range(min = 0.0))]
    pub cultural_events: f64,
    #[serde(rename = "communityEngagement")]
    #[validate(range(min = 0.0))]
    pub community_engagement: f64,
}

/// Pre-computed summary scores supplied by the data provider
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NeighborhoodScores {
    pub overall: f64,
    pub safety: f64,
    pub amenities: f64,
    pub transportation: f64,
    pub lifestyle: f64,
    pub affordability: f64,
}

/// Neighborhood attribute record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Neighborhood {
    pub id: String,
    pub name: String,
    #[validate(nested)]
    pub location: Location,
    #[validate(nested)]
    pub demographics: Demographics,
    pub amenities: Amenities,
    #[validate(nested)]
    pub safety: SafetyMetrics,
    #[validate(nested)]
    pub transportation: TransportationInfo,
    #[validate(nested)]
    pub lifestyle: LifestyleMetrics,
    #[serde(default)]
    pub scores: NeighborhoodScores,
    #[serde(rename = "lastUpdated", default = "chrono::Utc::now")]
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

/// Monthly housing budget range; min must not exceed max
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct BudgetRange {
    #[validate(range(min = 0.0))]
    pub min: f64,
    #[validate(range(min = 0.0))]
    pub max: f64,
}

/// Per-dimension importance weights (nominal 1-10).
///
/// An absent weight defaults to 5. An explicit 0 excludes the dimension from
/// the weighted aggregate entirely.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Priorities {
    #[serde(default)]
    pub safety: Option<f64>,
    #[serde(default)]
    pub amenities: Option<f64>,
    #[serde(default)]
    pub transportation: Option<f64>,
    #[serde(default)]
    pub lifestyle: Option<f64>,
    #[serde(default)]
    pub affordability: Option<f64>,
    #[serde(rename = "familyFriendly", default)]
    pub family_friendly: Option<f64>,
    #[serde(default)]
    pub nightlife: Option<f64>,
    #[serde(default)]
    pub quietness: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Young,
    Family,
    Senior,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPreference {
    Introvert,
    Extrovert,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStyle {
    Remote,
    Hybrid,
    Onsite,
}

/// Lifestyle profile describing how the user wants to live
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LifestyleProfile {
    #[serde(rename = "ageGroup")]
    pub age_group: AgeGroup,
    #[serde(rename = "activityLevel")]
    pub activity_level: ActivityLevel,
    #[serde(rename = "socialPreference")]
    pub social_preference: SocialPreference,
    /// Collected for future commute scoring; not read by the engine yet
    #[serde(rename = "workStyle")]
    pub work_style: WorkStyle,
}

/// User preference profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserPreferences {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[validate(nested)]
    pub location: Location,
    #[validate(nested)]
    pub budget: BudgetRange,
    #[serde(default)]
    pub priorities: Priorities,
    pub lifestyle: LifestyleProfile,
    /// Advisory tags; not enforced as hard filters by the engine
    #[serde(rename = "mustHaves", default)]
    pub must_haves: Vec<String>,
    #[serde(rename = "dealBreakers", default)]
    pub deal_breakers: Vec<String>,
}

/// Scored recommendation for a single neighborhood
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingResult {
    pub neighborhood: Neighborhood,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}
