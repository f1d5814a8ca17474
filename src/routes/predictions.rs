use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{assess_churn, estimate_duration, forecast_demand, peak_times};
use crate::models::{
    ChurnPredictionRequest, ChurnPredictionResponse, DemandPredictionRequest,
    DemandPredictionResponse, DurationPredictionRequest, DurationPredictionResponse,
    ErrorResponse,
};

/// Configure prediction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/duration", web::post().to(predict_duration))
        .route("/churn", web::post().to(predict_churn))
        .route("/demand", web::post().to(predict_demand))
        .route("/market-trends/{location}", web::get().to(market_trends));
}

/// Predict how long a service will take
///
/// POST /api/v1/predictions/duration
async fn predict_duration(req: web::Json<DurationPredictionRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for duration prediction: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Predicting duration for {} ({}, {})",
        req.service_type,
        req.complexity.as_str(),
        req.location
    );

    let estimate = estimate_duration(&req);

    HttpResponse::Ok().json(DurationPredictionResponse {
        estimated_duration_minutes: estimate.minutes,
        confidence_score: estimate.confidence,
        factors_considered: estimate.factors_considered,
        duration_range: estimate.range,
    })
}

/// Predict the likelihood of a customer churning
///
/// POST /api/v1/predictions/churn
async fn predict_churn(req: web::Json<ChurnPredictionRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for churn prediction: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!("Scoring churn risk for customer {}", req.customer_id);

    let assessment = assess_churn(&req);

    HttpResponse::Ok().json(ChurnPredictionResponse {
        customer_id: req.customer_id.clone(),
        churn_probability: assessment.probability,
        risk_level: assessment.risk_level,
        key_factors: assessment.key_factors,
        recommended_actions: assessment.recommended_actions,
    })
}

/// Forecast demand for a service in a location over a time horizon
///
/// POST /api/v1/predictions/demand
async fn predict_demand(req: web::Json<DemandPredictionRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for demand prediction: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Forecasting demand for {} in {} over {} days",
        req.service_type,
        req.location,
        req.time_horizon_days
    );

    let predicted_demand = forecast_demand(&req.service_type, req.prediction_date, req.time_horizon_days);

    HttpResponse::Ok().json(DemandPredictionResponse {
        service_type: req.service_type.clone(),
        location: req.location.clone(),
        predicted_demand,
        peak_times: peak_times(&req.service_type),
        seasonal_factors: serde_json::json!({
            "current_season_multiplier": 1.1,
            "upcoming_events": ["Festival Season", "Wedding Season"],
            "weather_impact": "Moderate",
        }),
    })
}

/// Market trends and insights for a location
///
/// GET /api/v1/predictions/market-trends/{location}
async fn market_trends(path: web::Path<String>) -> impl Responder {
    let location = path.into_inner();
    tracing::debug!("Fetching market trends for {}", location);

    HttpResponse::Ok().json(serde_json::json!({
        "location": location,
        "overall_growth": "12% YoY",
        "top_growing_services": [
            { "service": "Security System", "growth": "35%" },
            { "service": "HVAC Services", "growth": "28%" },
            { "service": "Electrical Services", "growth": "22%" }
        ],
        "market_saturation": {
            "House Cleaning": "High",
            "Plumbing Repair": "Medium",
            "Security System": "Low"
        },
        "seasonal_patterns": {
            "peak_months": ["March", "April", "October", "November"],
            "low_months": ["July", "August"]
        },
        "competitive_landscape": {
            "market_leaders": ["Hyphomz", "Urban Company", "Local Providers"],
            "market_share_hyphomz": "15%",
            "opportunity_score": 8.5
        }
    }))
}
