// Required external crates for configuration management and serialization
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, Environment, File};

/// Locations of the two read-only data sources
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DataConfig {
    /// CSV file with the predicted standings (Team, Result, points)
    pub predictions: PathBuf,
    /// JSON model artifact exposing `feature_importances`
    pub model: PathBuf,
}

/// Configuration for chart output
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChartConfig {
    /// Public asset directory the charts are written into
    pub output_dir: PathBuf,
}

/// Configuration for the HTTP server
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port number to listen on
    pub port: u16,
}

/// Configuration for application logging
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Optional directory for daily rolling log files
    pub directory: Option<PathBuf>,
}

/// Main settings struct that contains all configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Data source locations
    pub data: DataConfig,
    /// Chart output settings
    pub charts: ChartConfig,
    /// Server-related settings
    pub server: ServerConfig,
    /// Logging-related settings
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: DataConfig {
                predictions: PathBuf::from("data/predicted_ipl_2025_rankings.csv"),
                model: PathBuf::from("model/best_model.json"),
            },
            charts: ChartConfig {
                output_dir: PathBuf::from("static"),
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: Some(PathBuf::from("logs")),
            },
        }
    }
}

impl Settings {
    /// Loads settings from the given config directory, in the following order
    /// of precedence (highest to lowest):
    /// 1. Environment variables prefixed with IPL_DASHBOARD (`__` separates sections)
    /// 2. Local config file (local.toml) if present
    /// 3. Default config file (default.toml) if present
    /// 4. Built-in defaults
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = config_dir.join("default.toml");
        let local_config = config_dir.join("local.toml");

        let settings = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(default_config).required(false))
            .add_source(File::from(local_config).required(false))
            .add_source(
                Environment::with_prefix("IPL_DASHBOARD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message(
                "Port must be between 1 and 65535, got: 0".to_string()
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            _ => Err(ConfigError::Message(
                format!("Invalid logging level: {}. Must be one of: error, warn, info, debug, trace",
                    self.logging.level)
            )),
        }?;

        // Create chart output directory if it doesn't exist
        if !self.charts.output_dir.exists() {
            std::fs::create_dir_all(&self.charts.output_dir).map_err(|e| {
                ConfigError::Message(format!(
                    "Failed to create chart directory at {}: {}",
                    self.charts.output_dir.display(), e
                ))
            })?;
        }

        Ok(())
    }
}
