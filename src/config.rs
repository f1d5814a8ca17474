use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub features: FeatureSettings,
    #[serde(default)]
    pub thresholds: ThresholdSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Database settings are loaded for parity with the deployment
/// environment; no route reads or writes the database.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_database_url")]
    pub url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://./hyphomz_ml.db".to_string()
}

/// Cache settings, same status as the database: configured, unused.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            redis_url: default_redis_url(),
        }
    }
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

/// Feature flags; all routes are registered regardless, the flags do not
/// change any observable response.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureSettings {
    #[serde(default = "default_true")]
    pub enable_recommendations: bool,
    #[serde(default = "default_true")]
    pub enable_predictions: bool,
    #[serde(default = "default_true")]
    pub enable_analytics: bool,
    #[serde(default = "default_true")]
    pub enable_provider_matching: bool,
}

impl Default for FeatureSettings {
    fn default() -> Self {
        Self {
            enable_recommendations: true,
            enable_predictions: true,
            enable_analytics: true,
            enable_provider_matching: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdSettings {
    #[serde(default = "default_recommendation_threshold")]
    pub recommendation_model_threshold: f64,
    #[serde(default = "default_prediction_threshold")]
    pub prediction_confidence_threshold: f64,
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
}

impl Default for ThresholdSettings {
    fn default() -> Self {
        Self {
            recommendation_model_threshold: default_recommendation_threshold(),
            prediction_confidence_threshold: default_prediction_threshold(),
            max_recommendations: default_max_recommendations(),
        }
    }
}

fn default_recommendation_threshold() -> f64 {
    0.7
}

fn default_prediction_threshold() -> f64 {
    0.8
}

fn default_max_recommendations() -> usize {
    5
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
    #[serde(default = "default_distance_weight")]
    pub distance: f64,
    #[serde(default = "default_price_weight")]
    pub price: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            rating: default_rating_weight(),
            distance: default_distance_weight(),
            price: default_price_weight(),
            experience: default_experience_weight(),
        }
    }
}

fn default_rating_weight() -> f64 { 0.3 }
fn default_distance_weight() -> f64 { 0.3 }
fn default_price_weight() -> f64 { 0.2 }
fn default_experience_weight() -> f64 { 0.2 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with HYPHOMZ_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with HYPHOMZ_)
            // e.g., HYPHOMZ__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HYPHOMZ")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HYPHOMZ")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
