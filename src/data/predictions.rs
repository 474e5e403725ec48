use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::defaults::fallback_standings;
use super::types::{DataError, Loaded, RankingRecord};

/// Reads the predicted standings from a CSV file with the columns
/// `Team`, `Result` and `points`.
#[derive(Debug, Clone)]
pub struct PredictionStore {
    path: PathBuf,
}

impl PredictionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses every row of the standings file, keeping file order.
    pub fn read(&self) -> Result<Vec<RankingRecord>, DataError> {
        let file = File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            // Team names are data and pass through verbatim
            .trim(csv::Trim::Headers)
            .from_reader(BufReader::new(file));

        let mut standings = Vec::new();
        for result in reader.deserialize::<RankingRecord>() {
            standings.push(result?);
        }

        debug!("Read {} standings rows from {}", standings.len(), self.path.display());
        Ok(standings)
    }

    /// Reads the standings, substituting the built-in table on any failure.
    pub fn load(&self) -> Loaded<Vec<RankingRecord>> {
        match self.read() {
            Ok(standings) => Loaded::Source(standings),
            Err(e) => {
                warn!("Error loading predictions from {}: {}", self.path.display(), e);
                Loaded::Fallback {
                    data: fallback_standings(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
