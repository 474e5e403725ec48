use std::fmt;
use std::error::Error;
use std::path::PathBuf;
use plotters::drawing::DrawingAreaErrorKind;

/// Where the two dashboard charts live on disk
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPaths {
    pub team_points: PathBuf,
    pub feature_importance: PathBuf,
}

/// Errors raised while drawing or saving a chart
#[derive(Debug)]
pub enum ChartError {
    /// Creating the output directory or writing an image failed
    Io(std::io::Error),
    /// The plotting backend rejected a drawing operation
    Draw(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChartError::Io(e) => write!(f, "I/O error: {}", e),
            ChartError::Draw(msg) => write!(f, "Drawing failed: {}", msg),
        }
    }
}

impl Error for ChartError {}

impl From<std::io::Error> for ChartError {
    fn from(err: std::io::Error) -> Self {
        ChartError::Io(err)
    }
}

impl<E: Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(err.to_string())
    }
}
