mod defaults;
mod metrics;
mod predictions;
mod types;

// Re-export from types
pub use types::{DataError, FeatureImportance, Loaded, ModelMetrics, RankingRecord, ResultCategory};
// Re-export the readers
pub use metrics::MetricsStore;
pub use predictions::PredictionStore;
// Re-export the fixed values
pub use defaults::{
    fallback_metrics, fallback_standings, model_metrics, top_teams, BEST_MODEL_ACCURACY,
    BEST_MODEL_NAME, FALLBACK_IMPORTANCES, FALLBACK_STANDINGS, FEATURE_NAMES, TOP_TEAM_COUNT,
};
