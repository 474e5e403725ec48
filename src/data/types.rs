use std::fmt::{self};
use std::error::Error;
use serde::{Deserialize, Serialize, Serializer};

/// Predicted tournament outcome for a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultCategory {
    Winner,
    #[serde(rename = "Runner-up")]
    RunnerUp,
    #[serde(rename = "Second Runner-up")]
    SecondRunnerUp,
    Eliminator,
    Other,
}

impl ResultCategory {
    /// Label as it appears in the source data
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultCategory::Winner => "Winner",
            ResultCategory::RunnerUp => "Runner-up",
            ResultCategory::SecondRunnerUp => "Second Runner-up",
            ResultCategory::Eliminator => "Eliminator",
            ResultCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ResultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One team's predicted outcome and point total.
///
/// Field names follow the columns of the standings file, so the same
/// struct is used for reading the CSV and for the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingRecord {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Result")]
    pub result: ResultCategory,
    pub points: u32,
}

/// Feature weights in the fixed feature order.
///
/// Serialized as a JSON object whose keys keep that order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureImportance {
    entries: Vec<(&'static str, f64)>,
}

impl FeatureImportance {
    /// Pairs feature names with weights position by position
    pub fn from_pairs(names: &[&'static str], weights: &[f64]) -> Self {
        Self {
            entries: names.iter().copied().zip(weights.iter().copied()).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn get(&self, feature: &str) -> Option<f64> {
        self.entries.iter().find(|(name, _)| *name == feature).map(|(_, weight)| *weight)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FeatureImportance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, weight)| (*name, *weight)))
    }
}

/// Summary of the pretrained classifier shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelMetrics {
    pub best_model: String,
    pub accuracy: f64,
    pub feature_importance: FeatureImportance,
}

/// Outcome of reading a data source.
///
/// Callers always get usable data; the fallback case also carries the
/// reason the real source could not be used.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    /// Data read from the configured source
    Source(T),
    /// Built-in substitute data
    Fallback { data: T, reason: String },
}

impl<T> Loaded<T> {
    pub fn data(&self) -> &T {
        match self {
            Loaded::Source(data) => data,
            Loaded::Fallback { data, .. } => data,
        }
    }

    pub fn into_data(self) -> T {
        match self {
            Loaded::Source(data) => data,
            Loaded::Fallback { data, .. } => data,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Loaded::Fallback { .. })
    }

    /// Why the fallback was used, if it was
    pub fn reason(&self) -> Option<&str> {
        match self {
            Loaded::Source(_) => None,
            Loaded::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Errors raised while reading the standings or the model artifact
#[derive(Debug)]
pub enum DataError {
    /// Wraps std::io::Error for file operations
    Io(std::io::Error),
    /// Malformed standings file
    Csv(csv::Error),
    /// Malformed model artifact
    Json(serde_json::Error),
    /// The artifact's importance vector doesn't match the feature list
    FeatureCount { expected: usize, found: usize },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "I/O error: {}", e),
            DataError::Csv(e) => write!(f, "Invalid standings file: {}", e),
            DataError::Json(e) => write!(f, "Invalid model artifact: {}", e),
            DataError::FeatureCount { expected, found } => write!(
                f,
                "Expected {} feature importances, found {}",
                expected, found
            ),
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DataError::Io(e) => Some(e),
            DataError::Csv(e) => Some(e),
            DataError::Json(e) => Some(e),
            DataError::FeatureCount { .. } => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err)
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::Csv(err)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Json(err)
    }
}
