// Route exports
pub mod analytics;
pub mod predictions;
pub mod providers;
pub mod recommendations;

use actix_web::{web, HttpResponse, Responder};

use crate::core::ProviderMatcher;
use crate::models::HealthResponse;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: ProviderMatcher,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api/v1")
            .service(web::scope("/recommendations").configure(recommendations::configure))
            .service(web::scope("/predictions").configure(predictions::configure))
            .service(web::scope("/matching").configure(providers::configure))
            .service(web::scope("/analytics").configure(analytics::configure)),
    );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
