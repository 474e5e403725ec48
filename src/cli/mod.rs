// Declare the display submodule
mod display;

use std::path::PathBuf;
use clap::{Parser, Subcommand};

// Re-export the console renderer
pub use display::print_standings;

/// IPL 2025 predictions dashboard
#[derive(Debug, Parser)]
#[command(name = "ipl-dashboard", version)]
pub struct Cli {
    /// Directory holding default.toml and local.toml
    #[arg(long, default_value = "config")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the dashboard over HTTP (default)
    Serve,
    /// Redraw both charts once and exit
    Render,
    /// Print the predicted standings and model summary
    Standings,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
