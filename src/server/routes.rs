use axum::{
    Json,
    extract::State,
    response::Html,
};
use std::sync::Arc;
use chrono::Utc;
use tracing::{info, error};

use crate::data::{ModelMetrics, RankingRecord};
use super::pages;
use super::server::AppState;
use super::types::DashboardView;

/// Renders the dashboard page.
///
/// Both charts are redrawn on every call before the page is produced.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    info!("Dashboard endpoint called");

    let predictions = state.predictions.load();
    let metrics = state.metrics.load();

    let renderer = state.charts.clone();
    let standings = predictions.data().clone();
    let model = metrics.data().clone();
    if let Err(e) = tokio::task::spawn_blocking(move || renderer.regenerate(&standings, &model)).await {
        error!("Chart rendering task failed: {}", e);
    }

    let rendered_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let view = DashboardView::new(predictions, metrics, rendered_at);
    Html(pages::render_dashboard(&view))
}

/// Returns the full standings as a JSON array
pub async fn api_predictions(State(state): State<Arc<AppState>>) -> Json<Vec<RankingRecord>> {
    info!("Predictions endpoint called");
    Json(state.predictions.load().into_data())
}

/// Returns the model summary and feature importances as a JSON object
pub async fn api_metrics(State(state): State<Arc<AppState>>) -> Json<ModelMetrics> {
    info!("Metrics endpoint called");
    Json(state.metrics.load().into_data())
}

/// Returns the static about page
pub async fn about() -> Html<String> {
    info!("About endpoint called");
    Html(pages::render_about())
}
