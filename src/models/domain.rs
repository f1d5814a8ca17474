use serde::{Deserialize, Serialize};

/// Job complexity tier reported by the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    /// Duration multiplier for this tier
    pub fn multiplier(&self) -> f64 {
        match self {
            Complexity::Low => 0.8,
            Complexity::Medium => 1.0,
            Complexity::High => 1.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

/// Requested time slot for the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Duration multiplier for this slot
    pub fn factor(&self) -> f64 {
        match self {
            TimeOfDay::Morning => 1.0,
            TimeOfDay::Afternoon => 1.1,
            TimeOfDay::Evening => 0.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

/// How urgent the customer's request is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Urgent,
    Normal,
    Flexible,
}

/// Churn risk bucket derived from the churn probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Entry in the fixed service catalog used for recommendations
#[derive(Debug, Clone, Serialize)]
pub struct ServiceOffering {
    pub name: &'static str,
    pub base_price: u32,
    pub base_duration: u32,
}

/// Mock provider in the in-memory matching roster
#[derive(Debug, Clone)]
pub struct Provider {
    pub provider_id: &'static str,
    pub name: &'static str,
    pub rating: f64,
    pub experience_years: u32,
    pub distance_km: f64,
    pub price_estimate: u32,
    pub availability_status: &'static str,
}

/// Weights for the provider match score
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub rating: f64,
    pub distance: f64,
    pub price: f64,
    pub experience: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            rating: 0.3,
            distance: 0.3,
            price: 0.2,
            experience: 0.2,
        }
    }
}

/// One day of the demand forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandPoint {
    pub date: String,
    pub demand: u32,
    pub confidence: f64,
}
