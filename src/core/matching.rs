use crate::models::requests::ProviderMatchRequest;
use crate::models::responses::ProviderMatch;
use crate::models::{Provider, ScoringWeights};

/// Budget assumed when the request does not carry one
const DEFAULT_BUDGET: f64 = 2000.0;

/// Maximum providers returned per request
const MAX_MATCHES: usize = 5;

/// Mock provider roster; a real deployment would query the provider registry
pub fn provider_roster() -> Vec<Provider> {
    vec![
        Provider {
            provider_id: "prov_001",
            name: "Rajesh Kumar",
            rating: 4.9,
            experience_years: 8,
            distance_km: 2.3,
            price_estimate: 2000,
            availability_status: "available",
        },
        Provider {
            provider_id: "prov_002",
            name: "Priya Sharma",
            rating: 4.8,
            experience_years: 6,
            distance_km: 3.1,
            price_estimate: 1950,
            availability_status: "available",
        },
        Provider {
            provider_id: "prov_003",
            name: "Amit Singh",
            rating: 4.7,
            experience_years: 10,
            distance_km: 4.2,
            price_estimate: 2100,
            availability_status: "busy_but_available",
        },
    ]
}

/// Ranks providers against a service request with a weighted linear score
#[derive(Debug, Clone)]
pub struct ProviderMatcher {
    weights: ScoringWeights,
}

impl ProviderMatcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Score and rank the roster for a request, best match first
    pub fn find_best_providers(&self, request: &ProviderMatchRequest, roster: Vec<Provider>) -> Vec<ProviderMatch> {
        let budget = parse_budget(request.budget_range.as_deref());

        let mut matches: Vec<ProviderMatch> = roster
            .into_iter()
            .map(|provider| {
                let score = self.match_score(&provider, budget);
                let arrival_min = (provider.distance_km * 15.0) as u32;
                let arrival_max = (provider.distance_km * 20.0) as u32;

                ProviderMatch {
                    provider_id: provider.provider_id.to_string(),
                    name: provider.name.to_string(),
                    rating: provider.rating,
                    experience_years: provider.experience_years,
                    distance_km: provider.distance_km,
                    estimated_arrival: format!("{}-{} mins", arrival_min, arrival_max),
                    price_estimate: provider.price_estimate,
                    match_score: score,
                    availability_status: provider.availability_status.to_string(),
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(MAX_MATCHES);
        matches
    }

    /// Weighted combination of rating, proximity, price fit and experience
    fn match_score(&self, provider: &Provider, budget: f64) -> f64 {
        let rating_score = provider.rating / 5.0;
        let distance_score = (1.0 - provider.distance_km / 10.0).max(0.1);
        let price_score = (1.0 - (provider.price_estimate as f64 - budget).abs() / 1000.0).max(0.1);
        let experience_score = (provider.experience_years as f64 / 10.0).min(1.0);

        let score = rating_score * self.weights.rating
            + distance_score * self.weights.distance
            + price_score * self.weights.price
            + experience_score * self.weights.experience;

        super::round2(score)
    }
}

impl Default for ProviderMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Parse a budget out of a free-form range string
///
/// Accepts a plain number ("2500") or a range ("2000-3000", midpoint).
fn parse_budget(budget_range: Option<&str>) -> f64 {
    let Some(raw) = budget_range else {
        return DEFAULT_BUDGET;
    };
    let raw = raw.trim();

    if let Some((lo, hi)) = raw.split_once('-') {
        if let (Ok(lo), Ok(hi)) = (lo.trim().parse::<f64>(), hi.trim().parse::<f64>()) {
            return (lo + hi) / 2.0;
        }
    }

    raw.parse::<f64>().unwrap_or(DEFAULT_BUDGET)
}
