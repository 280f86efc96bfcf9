use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{find_recommendations, validate_preferences, MatchError};
use crate::models::{
    ApiResponse, FindRecommendationsRequest, HealthResponse, RecommendationsResponse,
    UserPreferences,
};
use crate::services::{NeighborhoodProvider, PreferenceStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<NeighborhoodProvider>,
    pub store: Arc<PreferenceStore>,
    pub max_limit: u16,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations/find", web::post().to(find))
        .route("/preferences", web::put().to(save_preferences))
        .route("/preferences/{userId}", web::get().to(get_preferences));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    }))
}

/// Find recommendations endpoint
///
/// POST /api/v1/recommendations/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "preferences": { ... },
///   "filters": { "minSafetyScore": 60, "minAmenities": 10, "query": "river" },
///   "limit": 20,
///   "radiusKm": 10.0
/// }
/// ```
async fn find(
    state: web::Data<AppState>,
    req: web::Json<FindRecommendationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find request: {}", errors);
        return HttpResponse::BadRequest()
            .json(ApiResponse::<RecommendationsResponse>::error(errors.to_string()));
    }

    // Inline preferences win over a stored profile
    let preferences = match &req.preferences {
        Some(preferences) => preferences.clone(),
        None => {
            let Some(user_id) = &req.user_id else {
                return HttpResponse::BadRequest().json(
                    ApiResponse::<RecommendationsResponse>::error(
                        "Either preferences or userId must be provided",
                    ),
                );
            };
            match state.store.get(user_id).await {
                Some(preferences) => preferences,
                None => {
                    return HttpResponse::NotFound().json(
                        ApiResponse::<RecommendationsResponse>::error(format!(
                            "No stored preferences for user {user_id}"
                        )),
                    );
                }
            }
        }
    };

    if let Err(e) = validate_preferences(&preferences) {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<RecommendationsResponse>::error(e.to_string()));
    }

    // Cap limit to prevent excessive result sets
    let limit = req.limit.min(state.max_limit) as usize;

    let request_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(
        "[{}] Finding recommendations for user {}, limit {}, radius {}km",
        request_id,
        preferences.user_id,
        limit,
        req.radius_km
    );

    let neighborhoods = match state
        .provider
        .get_neighborhoods(&preferences.location, req.radius_km)
        .await
    {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to retrieve neighborhoods: {}", e);
            return HttpResponse::BadGateway().json(
                ApiResponse::<RecommendationsResponse>::error(format!(
                    "Failed to retrieve neighborhoods: {e}"
                )),
            );
        }
    };

    let set = match find_recommendations(
        &preferences,
        neighborhoods.as_ref().clone(),
        &req.filters,
        limit,
    ) {
        Ok(set) => set,
        Err(MatchError::InvalidInput(reason)) => {
            tracing::info!("Scoring rejected input: {}", reason);
            return HttpResponse::BadRequest()
                .json(ApiResponse::<RecommendationsResponse>::error(reason));
        }
    };

    tracing::info!(
        "[{}] Returning {} recommendations for user {} (from {} candidates)",
        request_id,
        set.results.len(),
        preferences.user_id,
        set.total_candidates
    );

    HttpResponse::Ok().json(ApiResponse::ok(RecommendationsResponse {
        request_id,
        returned: set.results.len(),
        total_candidates: set.total_candidates,
        results: set.results,
    }))
}

/// Save a preference profile
///
/// PUT /api/v1/preferences
async fn save_preferences(
    state: web::Data<AppState>,
    req: web::Json<UserPreferences>,
) -> impl Responder {
    let preferences = req.into_inner();

    if preferences.user_id.is_empty() {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<UserPreferences>::error("userId must not be empty"));
    }
    if let Err(e) = validate_preferences(&preferences) {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<UserPreferences>::error(e.to_string()));
    }

    tracing::debug!("Storing preferences for user {}", preferences.user_id);
    state.store.put(preferences.clone()).await;

    HttpResponse::Ok().json(ApiResponse::ok(preferences))
}

/// Fetch a stored preference profile
///
/// GET /api/v1/preferences/{userId}
async fn get_preferences(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = path.into_inner();

    match state.store.get(&user_id).await {
        Some(preferences) => HttpResponse::Ok().json(ApiResponse::ok(preferences)),
        None => HttpResponse::NotFound().json(ApiResponse::<UserPreferences>::error(format!(
            "No stored preferences for user {user_id}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;
    use actix_web::{test, App};

    fn app_state() -> AppState {
        AppState {
            provider: Arc::new(
                NeighborhoodProvider::new(None, None, 5, 100, 300, 42, 12).unwrap(),
            ),
            store: Arc::new(PreferenceStore::new()),
            max_limit: 100,
        }
    }

    fn preferences(user_id: &str) -> UserPreferences {
        UserPreferences {
            user_id: user_id.to_string(),
            location: Location {
                latitude: 45.52,
                longitude: -122.68,
                address: None,
                city: None,
                state: None,
                postal_code: None,
            },
            budget: BudgetRange {
                min: 12000.0,
                max: 28000.0,
            },
            priorities: Priorities::default(),
            lifestyle: LifestyleProfile {
                age_group: AgeGroup::Young,
                activity_level: ActivityLevel::Medium,
                social_preference: SocialPreference::Balanced,
                work_style: WorkStyle::Hybrid,
            },
            must_haves: vec![],
            deal_breakers: vec![],
        }
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_find_with_inline_preferences() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure),
        )
        .await;

        let body = serde_json::json!({
            "preferences": serde_json::to_value(preferences("u1")).unwrap(),
            "limit": 5
        });
        let req = test::TestRequest::post()
            .uri("/recommendations/find")
            .set_json(&body)
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp["success"], true);
        assert_eq!(resp["data"]["returned"], 5);
        assert_eq!(resp["data"]["totalCandidates"], 12);
    }

    #[actix_web::test]
    async fn test_find_tags_response_with_request_id() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure),
        )
        .await;

        let body = serde_json::json!({
            "preferences": serde_json::to_value(preferences("u1")).unwrap(),
            "limit": 3
        });
        let req = test::TestRequest::post()
            .uri("/recommendations/find")
            .set_json(&body)
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let request_id = resp["data"]["requestId"].as_str().unwrap();
        assert!(uuid::Uuid::parse_str(request_id).is_ok());
    }

    #[actix_web::test]
    async fn test_find_requires_preferences_or_user_id() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/recommendations/find")
            .set_json(serde_json::json!({ "limit": 5 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_find_with_stored_preferences() {
        let state = app_state();
        state.store.put(preferences("stored-user")).await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/recommendations/find")
            .set_json(serde_json::json!({ "userId": "stored-user" }))
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["success"], true);
    }

    #[actix_web::test]
    async fn test_find_unknown_user_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/recommendations/find")
            .set_json(serde_json::json!({ "userId": "nobody" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_preferences_roundtrip() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure),
        )
        .await;

        let put = test::TestRequest::put()
            .uri("/preferences")
            .set_json(serde_json::to_value(preferences("roundtrip")).unwrap())
            .to_request();
        let resp = test::call_service(&app, put).await;
        assert!(resp.status().is_success());

        let get = test::TestRequest::get()
            .uri("/preferences/roundtrip")
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, get).await;
        assert_eq!(resp["data"]["userId"], "roundtrip");
    }

    #[actix_web::test]
    async fn test_invalid_preferences_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure),
        )
        .await;

        let mut bad = preferences("bad");
        bad.budget = BudgetRange {
            min: 50000.0,
            max: 10000.0,
        };
        let req = test::TestRequest::put()
            .uri("/preferences")
            .set_json(serde_json::to_value(bad).unwrap())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
