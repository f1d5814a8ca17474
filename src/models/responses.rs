use serde::{Deserialize, Serialize};

use crate::models::domain::{DemandPoint, RiskLevel};

/// Response for the duration prediction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationPredictionResponse {
    pub estimated_duration_minutes: u32,
    pub confidence_score: f64,
    pub factors_considered: Vec<String>,
    pub duration_range: DurationRange,
}

/// Min/max bounds around the point estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DurationRange {
    pub min: u32,
    pub max: u32,
}

/// Response for the churn prediction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurnPredictionResponse {
    pub customer_id: String,
    pub churn_probability: f64,
    pub risk_level: RiskLevel,
    pub key_factors: Vec<String>,
    pub recommended_actions: Vec<String>,
}

/// Response for the demand forecast endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandPredictionResponse {
    pub service_type: String,
    pub location: String,
    pub predicted_demand: Vec<DemandPoint>,
    pub peak_times: Vec<String>,
    pub seasonal_factors: serde_json::Value,
}

/// One ranked recommendation for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecommendation {
    pub service_name: String,
    pub confidence_score: f64,
    pub reason: String,
    pub estimated_price: u32,
    pub estimated_duration: u32,
}

/// One ranked provider match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderMatch {
    pub provider_id: String,
    pub name: String,
    pub rating: f64,
    pub experience_years: u32,
    pub distance_km: f64,
    pub estimated_arrival: String,
    pub price_estimate: u32,
    pub match_score: f64,
    pub availability_status: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
