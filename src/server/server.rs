use std::sync::Arc;
use std::error::Error;
use tokio::net::TcpListener;
use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::charts::ChartRenderer;
use crate::config::Settings;
use crate::data::{MetricsStore, PredictionStore};
use super::routes;

/// Read-only handles shared by every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub predictions: PredictionStore,
    pub metrics: MetricsStore,
    pub charts: ChartRenderer,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            predictions: PredictionStore::new(&settings.data.predictions),
            metrics: MetricsStore::new(&settings.data.model),
            charts: ChartRenderer::new(&settings.charts.output_dir),
        }
    }

    /// Loads both sources and redraws the charts, logging any failure
    pub fn refresh_charts(&self) {
        let standings = self.predictions.load();
        let metrics = self.metrics.load();
        self.charts.regenerate(standings.data(), metrics.data());
    }
}

/// Builds the dashboard router: the four pages/endpoints plus the chart directory
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(state.charts.output_dir());

    Router::new()
        .route("/", get(routes::dashboard))
        .route("/api/predictions", get(routes::api_predictions))
        .route("/api/metrics", get(routes::api_metrics))
        .route("/about", get(routes::about))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP server for the predictions dashboard
pub struct ApiServer {
    state: Arc<AppState>,
    host: String,
    port: u16,
}

impl ApiServer {
    pub fn new(settings: &Settings) -> Self {
        let state = AppState::from_settings(settings);

        // Draw the charts once so /static is populated before the first page view
        info!("Generating initial visualizations...");
        state.refresh_charts();

        info!("Creating new API server on {}:{}", settings.server.host, settings.server.port);
        Self {
            state: Arc::new(state),
            host: settings.server.host.clone(),
            port: settings.server.port,
        }
    }

    pub async fn start(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = build_router(Arc::clone(&self.state));

        info!("Starting server on {}:{}", self.host, self.port);
        let listener = TcpListener::bind((self.host.as_str(), self.port)).await?;

        info!("Server started successfully");
        axum::serve(listener, app).await?;
        Ok(())
    }
}
