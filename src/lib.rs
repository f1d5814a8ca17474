//! Hyphomz ML - prediction backend for the Hyphomz home-services marketplace
//!
//! This library exposes the mock prediction engines (duration, churn,
//! demand, provider matching, recommendations) and the HTTP routes that
//! serve them. Every prediction is a fixed formula or seeded sample over
//! the request fields; there is no trained model behind the API.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{
    assess_churn, estimate_duration, forecast_demand, recommend_for_user, ProviderMatcher,
};
pub use models::{
    ChurnPredictionRequest, DurationPredictionRequest, ProviderMatchRequest, ScoringWeights,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let recs = recommend_for_user("smoke_test_user", 3);
        assert_eq!(recs.len(), 3);
    }
}
