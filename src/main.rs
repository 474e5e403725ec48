use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ipl_dashboard::config::{LoggingConfig, Settings};
use ipl_dashboard::server::{ApiServer, AppState};

mod cli;
use cli::{Cli, Command};

/// Sets up console logging plus, when a log directory is configured, a daily
/// rolling log file.
///
/// The returned guard flushes the file writer and must live until exit.
fn init_logging(logging: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&logging.level)
        .with_context(|| format!("Invalid log level: {}", logging.level))?;

    // Console output goes to stderr so `standings` output stays clean
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match &logging.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)
                .with_context(|| format!("Failed to create log directory {}", directory.display()))?;
            let file_appender = tracing_appender::rolling::RollingFileAppender::new(
                tracing_appender::rolling::Rotation::DAILY,
                directory,
                "ipl-dashboard",
            );
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                // Disable ANSI colors for cleaner log files
                .with_ansi(false)
                .with_line_number(true)
                .with_file(true)
                .with_thread_ids(true)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Entry point for the dashboard
///
/// - Serve (default): renders the charts and serves the dashboard over HTTP
/// - Render: redraws both charts and exits
/// - Standings: prints the standings and model summary to the console
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(&cli.config_dir)
        .with_context(|| format!("Failed to load settings from {}", cli.config_dir.display()))?;
    let _guard = init_logging(&settings.logging)?;

    info!("IPL dashboard starting up...");
    info!("Predictions file: {}", settings.data.predictions.display());
    info!("Model artifact: {}", settings.data.model.display());
    info!("Chart directory: {}", settings.charts.output_dir.display());

    match cli.command() {
        Command::Serve => {
            let server = ApiServer::new(&settings);
            server.start().await.map_err(|e| anyhow!(e))?;
        }
        Command::Render => {
            let state = AppState::from_settings(&settings);
            let standings = state.predictions.load();
            let metrics = state.metrics.load();
            let paths = state
                .charts
                .render(standings.data(), metrics.data())
                .context("Failed to render charts")?;
            info!("Wrote {}", paths.team_points.display());
            info!("Wrote {}", paths.feature_importance.display());
        }
        Command::Standings => {
            let state = AppState::from_settings(&settings);
            cli::print_standings(&state.predictions.load(), &state.metrics.load());
        }
    }

    Ok(())
}
