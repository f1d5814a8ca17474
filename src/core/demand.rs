use chrono::{DateTime, Datelike, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::DemandPoint;

/// Weekend surge multiplier
const WEEKEND_MULTIPLIER: f64 = 1.3;

/// Base daily bookings per service type
pub fn base_daily_demand(service_type: &str) -> u32 {
    match service_type {
        "House Cleaning" => 15,
        "Plumbing Repair" => 8,
        "Electrical Services" => 12,
        "Interior Painting" => 5,
        "Lawn Care" => 10,
        "HVAC Services" => 7,
        "Security System" => 4,
        "Custom Furniture" => 3,
        _ => 8,
    }
}

/// Forecast daily demand over a horizon starting at `start`
///
/// Each day applies a weekend surge and a jitter drawn from an RNG
/// seeded by the day's Unix timestamp, so repeated calls for the same
/// window return the same forecast. Confidence decays by 0.05 per day
/// offset, floored at 0.6.
pub fn forecast_demand(service_type: &str, start: DateTime<Utc>, horizon_days: u32) -> Vec<DemandPoint> {
    let base = base_daily_demand(service_type) as f64;

    (0..horizon_days)
        .map(|offset| {
            let date = start + Duration::days(offset as i64);

            let mut daily = base;
            if date.weekday().num_days_from_monday() >= 5 {
                daily *= WEEKEND_MULTIPLIER;
            }

            let mut rng = StdRng::seed_from_u64(date.timestamp() as u64);
            let variation: f64 = rng.gen_range(0.8..1.4);
            let demand = (daily * variation) as u32;

            let confidence = super::round2((0.95 - offset as f64 * 0.05).max(0.6));

            DemandPoint {
                date: date.to_rfc3339(),
                demand,
                confidence,
            }
        })
        .collect()
}

/// Peak booking windows for a service type
pub fn peak_times(service_type: &str) -> Vec<String> {
    let mut peaks = vec!["Saturday Morning".to_string(), "Sunday Afternoon".to_string()];
    match service_type {
        "House Cleaning" => {
            peaks.push("Friday Evening".to_string());
            peaks.push("Monday Morning".to_string());
        }
        "HVAC Services" => {
            peaks.push("Summer Months".to_string());
            peaks.push("Winter Start".to_string());
        }
        _ => {}
    }
    peaks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_confidence_decays_and_floors() {
        let start = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap();
        let forecast = forecast_demand("House Cleaning", start, 14);

        assert_eq!(forecast.len(), 14);
        for pair in forecast.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
        assert_eq!(forecast[0].confidence, 0.95);
        assert_eq!(forecast[13].confidence, 0.6);
    }

    #[test]
    fn test_forecast_is_deterministic() {
        let start = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap();
        let first = forecast_demand("Plumbing Repair", start, 7);
        let second = forecast_demand("Plumbing Repair", start, 7);

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.demand, b.demand);
            assert_eq!(a.date, b.date);
        }
    }

    #[test]
    fn test_demand_within_jitter_bounds() {
        // Monday start, first 5 days are weekdays: base * [0.8, 1.4)
        let start = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap();
        let forecast = forecast_demand("Electrical Services", start, 5);

        for point in &forecast {
            assert!(point.demand >= (12.0 * 0.8) as u32);
            assert!(point.demand <= (12.0 * 1.4) as u32);
        }
    }

    #[test]
    fn test_peak_times_per_service() {
        assert_eq!(peak_times("House Cleaning").len(), 4);
        assert_eq!(peak_times("HVAC Services").len(), 4);
        assert_eq!(peak_times("Lawn Care").len(), 2);
    }

    #[test]
    fn test_unknown_service_base_demand() {
        assert_eq!(base_daily_demand("Dog Walking"), 8);
    }
}
