use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::{fallback_metrics, model_metrics, FEATURE_NAMES};
use super::types::{DataError, Loaded, ModelMetrics};

/// The part of the serialized classifier the dashboard needs.
///
/// Any other keys in the artifact (parameters, training metadata) are ignored.
#[derive(Debug, Deserialize)]
struct ModelArtifact {
    feature_importances: Vec<f64>,
}

/// Reads feature importances from the serialized model artifact.
#[derive(Debug, Clone)]
pub struct MetricsStore {
    path: PathBuf,
}

impl MetricsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the artifact and pairs its importance vector with `FEATURE_NAMES`.
    ///
    /// A vector of any other length is rejected rather than truncated.
    pub fn read(&self) -> Result<ModelMetrics, DataError> {
        let content = fs::read_to_string(&self.path)?;
        let artifact: ModelArtifact = serde_json::from_str(&content)?;

        if artifact.feature_importances.len() != FEATURE_NAMES.len() {
            return Err(DataError::FeatureCount {
                expected: FEATURE_NAMES.len(),
                found: artifact.feature_importances.len(),
            });
        }

        debug!("Read feature importances from {}", self.path.display());
        Ok(model_metrics(&artifact.feature_importances))
    }

    /// Reads the metrics, substituting the built-in importances on any failure.
    pub fn load(&self) -> Loaded<ModelMetrics> {
        match self.read() {
            Ok(metrics) => Loaded::Source(metrics),
            Err(e) => {
                warn!("Error loading model metrics from {}: {}", self.path.display(), e);
                Loaded::Fallback {
                    data: fallback_metrics(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
