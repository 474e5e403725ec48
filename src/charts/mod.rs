mod render;
mod types;

pub use render::{bar_color, ChartRenderer, FEATURE_IMPORTANCE_FILE, TEAM_POINTS_FILE};
pub use types::{ChartError, ChartPaths};
