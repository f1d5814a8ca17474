use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::models::responses::ServiceRecommendation;
use crate::models::ServiceOffering;

/// Confidence assigned to the top-ranked recommendation
const TOP_CONFIDENCE: f64 = 0.95;

/// Confidence drop per rank position
const CONFIDENCE_STEP: f64 = 0.1;

/// Rotating explanations attached to recommendations
const REASONS: [&str; 5] = [
    "Based on your previous bookings and similar users' preferences",
    "Popular service in your area with high satisfaction rates",
    "Seasonal recommendation - high demand period",
    "Matches your service frequency patterns",
    "Recommended due to complementary service usage",
];

/// Fixed service catalog the recommender samples from
pub fn service_catalog() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering { name: "House Cleaning", base_price: 1200, base_duration: 120 },
        ServiceOffering { name: "Plumbing Repair", base_price: 2000, base_duration: 90 },
        ServiceOffering { name: "Electrical Services", base_price: 2300, base_duration: 100 },
        ServiceOffering { name: "Interior Painting", base_price: 3200, base_duration: 240 },
        ServiceOffering { name: "Lawn Care", base_price: 1000, base_duration: 80 },
        ServiceOffering { name: "HVAC Services", base_price: 2500, base_duration: 150 },
        ServiceOffering { name: "Security System", base_price: 2950, base_duration: 180 },
        ServiceOffering { name: "Custom Furniture", base_price: 4000, base_duration: 300 },
    ]
}

/// Stable per-user seed so the same user always gets the same sample
fn user_seed(user_id: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    user_id.hash(&mut hasher);
    hasher.finish() % 1000
}

/// Generate up to `count` recommendations for a user
///
/// Samples the catalog without replacement with a per-user seeded RNG;
/// confidence decreases by a fixed step per rank and the reason rotates
/// through a fixed list.
pub fn recommend_for_user(user_id: &str, count: usize) -> Vec<ServiceRecommendation> {
    let catalog = service_catalog();
    let count = count.min(catalog.len());

    let mut rng = StdRng::seed_from_u64(user_seed(user_id));
    let selected: Vec<ServiceOffering> = catalog
        .choose_multiple(&mut rng, count)
        .cloned()
        .collect();

    selected
        .into_iter()
        .enumerate()
        .map(|(rank, offering)| ServiceRecommendation {
            service_name: offering.name.to_string(),
            confidence_score: super::round2(TOP_CONFIDENCE - rank as f64 * CONFIDENCE_STEP),
            reason: REASONS[rank % REASONS.len()].to_string(),
            estimated_price: offering.base_price,
            estimated_duration: offering.base_duration,
        })
        .collect()
}
