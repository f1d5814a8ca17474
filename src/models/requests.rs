use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::models::domain::{Complexity, TimeOfDay, Urgency};

/// Request to estimate how long a service will take
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DurationPredictionRequest {
    #[validate(length(min = 1))]
    pub service_type: String,
    #[serde(default = "default_area_sqft")]
    pub area_sqft: Option<f64>,
    #[serde(default = "default_complexity")]
    pub complexity: Complexity,
    #[serde(default = "default_experience")]
    pub provider_experience: u32,
    #[serde(default = "default_time_of_day")]
    pub time_of_day: TimeOfDay,
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_area_sqft() -> Option<f64> {
    Some(1200.0)
}

fn default_complexity() -> Complexity {
    Complexity::Medium
}

fn default_experience() -> u32 {
    5
}

fn default_time_of_day() -> TimeOfDay {
    TimeOfDay::Morning
}

fn default_location() -> String {
    "Greater Noida".to_string()
}

/// Request to score a customer's churn risk
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChurnPredictionRequest {
    #[validate(length(min = 1))]
    pub customer_id: String,
    pub bookings_count: u32,
    pub avg_rating_given: f64,
    pub days_since_last_booking: u32,
    pub total_spent: f64,
    pub complaint_count: u32,
    #[serde(default)]
    pub preferred_services: Vec<String>,
}

/// Request to forecast demand for a service in a location
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DemandPredictionRequest {
    #[validate(length(min = 1))]
    pub service_type: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub prediction_date: chrono::DateTime<chrono::Utc>,
    #[serde(default = "default_horizon")]
    pub time_horizon_days: u32,
}

fn default_horizon() -> u32 {
    7
}

/// Request to match the best providers for a job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProviderMatchRequest {
    #[validate(length(min = 1))]
    pub service_type: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default = "default_urgency")]
    pub urgency: Urgency,
    #[serde(default)]
    pub budget_range: Option<String>,
    #[serde(default)]
    pub preferred_time: Option<String>,
}

fn default_urgency() -> Urgency {
    Urgency::Normal
}

/// Request for personalized service recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[serde(default = "default_num_recommendations")]
    pub num_recommendations: usize,
    #[serde(default)]
    pub user_preferences: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    pub location: Option<String>,
}

fn default_num_recommendations() -> usize {
    5
}
