// Core formula engine exports
pub mod churn;
pub mod demand;
pub mod duration;
pub mod matching;
pub mod recommend;

pub use churn::{assess_churn, ChurnAssessment};
pub use demand::{base_daily_demand, forecast_demand, peak_times};
pub use duration::{base_duration_minutes, estimate_duration, DurationEstimate};
pub use matching::{provider_roster, ProviderMatcher};
pub use recommend::{recommend_for_user, service_catalog};

/// Round to two decimal places, matching the display precision of every
/// confidence and score field in the API
#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.8500000001), 0.85);
        assert_eq!(round2(0.954), 0.95);
        assert_eq!(round2(0.956), 0.96);
    }
}
