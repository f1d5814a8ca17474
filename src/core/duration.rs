use crate::models::requests::DurationPredictionRequest;
use crate::models::responses::DurationRange;
use crate::models::Complexity;

/// Hard bounds on any estimate, in minutes
const MIN_DURATION_MINUTES: u32 = 30;
const MAX_DURATION_MINUTES: u32 = 480;

/// Average area the per-service base durations were calibrated against
const BASELINE_AREA_SQFT: f64 = 1200.0;

/// Result of the duration estimator
#[derive(Debug, Clone)]
pub struct DurationEstimate {
    pub minutes: u32,
    pub confidence: f64,
    pub factors_considered: Vec<String>,
    pub range: DurationRange,
}

/// Base duration in minutes per service type
pub fn base_duration_minutes(service_type: &str) -> u32 {
    match service_type {
        "House Cleaning" => 120,
        "Plumbing Repair" => 90,
        "Electrical Services" => 100,
        "Interior Painting" => 240,
        "Lawn Care" => 80,
        "Custom Furniture" => 300,
        "HVAC Services" => 150,
        "Security System" => 180,
        _ => 120,
    }
}

/// Whether the service duration scales with the covered area
fn scales_with_area(service_type: &str) -> bool {
    matches!(service_type, "House Cleaning" | "Interior Painting")
}

/// Estimate how long a service will take
///
/// Multiplies a per-service base duration by complexity, provider
/// experience, area (for area-bound services) and time-of-day factors,
/// then clamps the result to [30, 480] minutes.
pub fn estimate_duration(request: &DurationPredictionRequest) -> DurationEstimate {
    let base = base_duration_minutes(&request.service_type) as f64;

    let mut duration = base * request.complexity.multiplier();

    // More experienced providers work faster, floored at 0.7
    let experience_factor = (1.2 - request.provider_experience as f64 * 0.03).max(0.7);
    duration *= experience_factor;

    if let Some(area_sqft) = request.area_sqft {
        if scales_with_area(&request.service_type) {
            let area_factor = area_sqft / BASELINE_AREA_SQFT;
            duration *= 0.8 + area_factor * 0.4;
        }
    }

    duration *= request.time_of_day.factor();

    let minutes = (duration as u32).clamp(MIN_DURATION_MINUTES, MAX_DURATION_MINUTES);

    let confidence = estimate_confidence(request.provider_experience, request.complexity);

    let mut factors_considered = vec![
        format!("Service type: {}", request.service_type),
        format!("Complexity: {}", request.complexity.as_str()),
        format!("Provider experience: {} years", request.provider_experience),
        format!("Time of day: {}", request.time_of_day.as_str()),
    ];
    if let Some(area_sqft) = request.area_sqft {
        factors_considered.push(format!("Area: {} sq ft", area_sqft));
    }

    let range = DurationRange {
        min: ((minutes as f64 * 0.8) as u32).max(MIN_DURATION_MINUTES),
        max: ((minutes as f64 * 1.3) as u32).min(MAX_DURATION_MINUTES),
    };

    DurationEstimate {
        minutes,
        confidence,
        factors_considered,
        range,
    }
}

/// Confidence for the estimate, penalized for green providers and hard jobs
fn estimate_confidence(provider_experience: u32, complexity: Complexity) -> f64 {
    let mut confidence = 0.85;
    if provider_experience < 2 {
        confidence -= 0.1;
    }
    if complexity == Complexity::High {
        confidence -= 0.05;
    }
    super::round2(confidence)
}
