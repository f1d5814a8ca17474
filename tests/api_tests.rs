// HTTP-level tests for the Hyphomz ML API

use actix_web::{test, web, App};
use hyphomz_ml::core::ProviderMatcher;
use hyphomz_ml::routes::{configure_routes, AppState};
use serde_json::{json, Value};

fn app_state() -> AppState {
    AppState {
        matcher: ProviderMatcher::with_default_weights(),
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[actix_web::test]
async fn test_duration_prediction_reference_vector() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/predictions/duration")
        .set_json(json!({
            "service_type": "House Cleaning",
            "area_sqft": 1500,
            "complexity": "medium",
            "provider_experience": 7,
            "time_of_day": "morning"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["estimated_duration_minutes"], 154);
    assert_eq!(body["confidence_score"], 0.85);
    assert_eq!(body["duration_range"]["min"], 123);
    assert_eq!(body["duration_range"]["max"], 200);
    assert_eq!(body["factors_considered"].as_array().unwrap().len(), 5);
}

#[actix_web::test]
async fn test_duration_prediction_defaults_applied() {
    let app = init_app!();

    // Only the service type; everything else takes its default
    let req = test::TestRequest::post()
        .uri("/api/v1/predictions/duration")
        .set_json(json!({ "service_type": "Plumbing Repair" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn test_duration_prediction_rejects_invalid_complexity() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/predictions/duration")
        .set_json(json!({
            "service_type": "House Cleaning",
            "complexity": "extreme"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_duration_prediction_rejects_empty_service_type() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/predictions/duration")
        .set_json(json!({ "service_type": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_churn_prediction_reference_vector() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/predictions/churn")
        .set_json(json!({
            "customer_id": "cust_12345",
            "bookings_count": 3,
            "avg_rating_given": 3.8,
            "days_since_last_booking": 75,
            "total_spent": 8500,
            "complaint_count": 2
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["customer_id"], "cust_12345");
    assert_eq!(body["churn_probability"], 0.5);
    assert_eq!(body["risk_level"], "medium");
    assert!(!body["key_factors"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_demand_prediction_shape_and_confidence() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/predictions/demand")
        .set_json(json!({
            "service_type": "House Cleaning",
            "location": "Greater Noida",
            "prediction_date": "2024-06-03T00:00:00Z",
            "time_horizon_days": 7
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let points = body["predicted_demand"].as_array().unwrap();
    assert_eq!(points.len(), 7);

    let confidences: Vec<f64> = points.iter().map(|p| p["confidence"].as_f64().unwrap()).collect();
    for pair in confidences.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
    assert!(confidences.iter().all(|c| *c >= 0.6));

    // House Cleaning gets its extra peak windows
    assert_eq!(body["peak_times"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn test_market_trends_echoes_location() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/predictions/market-trends/Delhi")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["location"], "Delhi");
    assert_eq!(body["top_growing_services"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_provider_matching_sorted_and_capped() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/matching/find-best-provider")
        .set_json(json!({
            "service_type": "Plumbing Repair",
            "location": "Greater Noida",
            "urgency": "normal",
            "budget_range": "2000-3000"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let matches = body.as_array().unwrap();
    assert!(!matches.is_empty() && matches.len() <= 5);

    let scores: Vec<f64> = matches.iter().map(|m| m["match_score"].as_f64().unwrap()).collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[actix_web::test]
async fn test_provider_availability() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/matching/provider-availability/prov_001")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["provider_id"], "prov_001");
    assert_eq!(body["status"], "available");
}

#[actix_web::test]
async fn test_user_recommendations_deterministic() {
    let app = init_app!();

    let payload = json!({
        "user_id": "user_456",
        "num_recommendations": 3
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations/user/user_456")
        .set_json(payload.clone())
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations/user/user_456")
        .set_json(payload)
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(first.as_array().unwrap().len(), 3);
    assert_eq!(first, second);
}

#[actix_web::test]
async fn test_trending_services_payload() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations/trending")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["trending_services"].as_array().unwrap().len(), 3);
    assert_eq!(body["analysis_period"], "Last 30 days");
}

#[actix_web::test]
async fn test_popular_services_unknown_location_falls_back() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations/popular/Atlantis")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["location"], "Atlantis");
    // Falls back to the Greater Noida table
    assert_eq!(body["popular_services"][0]["service"], "House Cleaning");
}

#[actix_web::test]
async fn test_real_time_metrics_ranges() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/analytics/real-time-metrics")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let bookings = body["active_bookings"].as_u64().unwrap();
    assert!((45..=85).contains(&bookings));

    let satisfaction = body["customer_satisfaction_today"].as_f64().unwrap();
    assert!((4.6..=4.9).contains(&satisfaction));

    assert_eq!(body["popular_services_now"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_malformed_json_returns_400() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/predictions/churn")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}
