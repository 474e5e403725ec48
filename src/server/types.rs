use crate::data::{FeatureImportance, Loaded, ModelMetrics, RankingRecord};

/// Model name and accuracy as shown in the dashboard header cards
#[derive(Debug, Clone)]
pub struct ModelSummary {
    pub name: String,
    pub accuracy: f64,
}

/// Everything the dashboard page displays for one request
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub predictions: Vec<RankingRecord>,
    pub top_teams: Vec<RankingRecord>,
    pub model: ModelSummary,
    pub feature_importance: FeatureImportance,
    /// Reasons a source was replaced by built-in data, if any
    pub fallback_reasons: Vec<String>,
    pub rendered_at: String,
}

impl DashboardView {
    pub fn new(
        predictions: Loaded<Vec<RankingRecord>>,
        metrics: Loaded<ModelMetrics>,
        rendered_at: String,
    ) -> Self {
        let fallback_reasons = [predictions.reason(), metrics.reason()]
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect();

        let predictions = predictions.into_data();
        let metrics = metrics.into_data();
        let top_teams = crate::data::top_teams(&predictions).to_vec();

        Self {
            predictions,
            top_teams,
            model: ModelSummary {
                name: metrics.best_model,
                accuracy: metrics.accuracy,
            },
            feature_importance: metrics.feature_importance,
            fallback_reasons,
            rendered_at,
        }
    }
}
