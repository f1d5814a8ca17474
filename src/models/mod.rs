// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Complexity, DemandPoint, Provider, RiskLevel, ScoringWeights, ServiceOffering, TimeOfDay, Urgency};
pub use requests::{ChurnPredictionRequest, DemandPredictionRequest, DurationPredictionRequest, ProviderMatchRequest, RecommendationRequest};
pub use responses::{ChurnPredictionResponse, DemandPredictionResponse, DurationPredictionResponse, DurationRange, ErrorResponse, HealthResponse, ProviderMatch, ServiceRecommendation};
