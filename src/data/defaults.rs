//! Fixed model facts and the substitute data used when a source can't be read.

use super::types::{FeatureImportance, ModelMetrics, RankingRecord, ResultCategory};

/// Name reported for the pretrained classifier
pub const BEST_MODEL_NAME: &str = "XGBoost";

/// Reported test accuracy of the classifier, in percent
pub const BEST_MODEL_ACCURACY: f64 = 97.60;

/// Model inputs, in the order of the artifact's importance vector
pub const FEATURE_NAMES: [&str; 6] = [
    "batting_strength",
    "bowling_strength",
    "consistency",
    "historical_win_rate",
    "head_to_head_win_rate",
    "venue_win_rate",
];

/// Importances reported when the model artifact is unavailable
pub const FALLBACK_IMPORTANCES: [f64; 6] = [0.35, 0.25, 0.15, 0.10, 0.10, 0.05];

/// Standings reported when the predictions file is unavailable
pub const FALLBACK_STANDINGS: [(&str, ResultCategory, u32); 10] = [
    ("Gujarat Titans", ResultCategory::Winner, 10),
    ("Royal Challengers Bangalore", ResultCategory::RunnerUp, 8),
    ("Punjab Kings", ResultCategory::SecondRunnerUp, 8),
    ("Mumbai Indians", ResultCategory::Eliminator, 6),
    ("Kolkata Knight Riders", ResultCategory::Other, 6),
    ("Rajasthan Royals", ResultCategory::Other, 2),
    ("Lucknow Super Giants", ResultCategory::Other, 2),
    ("Delhi Capitals", ResultCategory::Other, 2),
    ("Chennai Super Kings", ResultCategory::Other, 0),
    ("Sunrisers Hyderabad", ResultCategory::Other, 0),
];

/// Number of leading standings rows highlighted as top teams
pub const TOP_TEAM_COUNT: usize = 4;

pub fn fallback_standings() -> Vec<RankingRecord> {
    FALLBACK_STANDINGS
        .iter()
        .map(|(team, result, points)| RankingRecord {
            team: team.to_string(),
            result: *result,
            points: *points,
        })
        .collect()
}

/// Wraps importances with the fixed model name and accuracy
pub fn model_metrics(importances: &[f64]) -> ModelMetrics {
    ModelMetrics {
        best_model: BEST_MODEL_NAME.to_string(),
        accuracy: BEST_MODEL_ACCURACY,
        feature_importance: FeatureImportance::from_pairs(&FEATURE_NAMES, importances),
    }
}

pub fn fallback_metrics() -> ModelMetrics {
    model_metrics(&FALLBACK_IMPORTANCES)
}

/// The leading standings rows, in source order.
///
/// No sorting happens here; the source is expected to be ordered already.
pub fn top_teams(standings: &[RankingRecord]) -> &[RankingRecord] {
    &standings[..standings.len().min(TOP_TEAM_COUNT)]
}
