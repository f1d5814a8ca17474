use crate::models::requests::ChurnPredictionRequest;
use crate::models::RiskLevel;

/// Probability is kept away from 0 and 1; this is a heuristic, not a certainty
const MIN_PROBABILITY: f64 = 0.05;
const MAX_PROBABILITY: f64 = 0.95;

/// Result of the churn estimator
#[derive(Debug, Clone)]
pub struct ChurnAssessment {
    pub probability: f64,
    pub risk_level: RiskLevel,
    pub key_factors: Vec<String>,
    pub recommended_actions: Vec<String>,
}

/// Score the likelihood that a customer stops booking
///
/// Starts at a 0.1 base probability and applies fixed increments keyed
/// on booking count, rating behavior, recency, complaints and spend,
/// clamped to [0.05, 0.95] and bucketed at 0.3/0.6.
pub fn assess_churn(request: &ChurnPredictionRequest) -> ChurnAssessment {
    let mut score: f64 = 0.1;

    // Booking frequency
    if request.bookings_count < 3 {
        score += 0.3;
    } else if request.bookings_count > 10 {
        score -= 0.1;
    }

    // Rating patterns
    if request.avg_rating_given < 3.5 {
        score += 0.4;
    } else if request.avg_rating_given > 4.5 {
        score -= 0.2;
    }

    // Recency
    if request.days_since_last_booking > 90 {
        score += 0.5;
    } else if request.days_since_last_booking < 30 {
        score -= 0.1;
    }

    // Complaints, linear in count
    score += request.complaint_count as f64 * 0.2;

    // Spend
    if request.total_spent < 5000.0 {
        score += 0.2;
    } else if request.total_spent > 20000.0 {
        score -= 0.15;
    }

    let score = score.clamp(MIN_PROBABILITY, MAX_PROBABILITY);

    // Bucketed before display rounding
    let risk_level = if score < 0.3 {
        RiskLevel::Low
    } else if score < 0.6 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };

    let probability = super::round2(score);

    let mut key_factors = Vec::new();
    if request.days_since_last_booking > 60 {
        key_factors.push("Long time since last booking".to_string());
    }
    if request.avg_rating_given < 4.0 {
        key_factors.push("Below average satisfaction ratings".to_string());
    }
    if request.complaint_count > 0 {
        key_factors.push("Previous complaints filed".to_string());
    }
    if request.bookings_count < 5 {
        key_factors.push("Low engagement history".to_string());
    }
    if key_factors.is_empty() {
        key_factors.push("Customer appears to be engaged".to_string());
    }

    let mut recommended_actions = Vec::new();
    if risk_level != RiskLevel::Low {
        if request.days_since_last_booking > 45 {
            recommended_actions.push("Send re-engagement campaign".to_string());
        }
        if request.avg_rating_given < 4.0 {
            recommended_actions.push("Proactive customer service outreach".to_string());
        }
        if !request.preferred_services.is_empty() {
            recommended_actions.push("Offer discount on preferred services".to_string());
        }
        recommended_actions.push("Personalized service recommendations".to_string());
    }
    if recommended_actions.is_empty() {
        recommended_actions.push("Continue regular service".to_string());
    }

    ChurnAssessment {
        probability,
        risk_level,
        key_factors,
        recommended_actions,
    }
}
