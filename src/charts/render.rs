use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use tracing::{error, info};

use crate::data::{ModelMetrics, RankingRecord};
use super::types::{ChartError, ChartPaths};

pub const TEAM_POINTS_FILE: &str = "team_points.png";
pub const FEATURE_IMPORTANCE_FILE: &str = "feature_importance.png";

const TEAM_POINTS_SIZE: (u32, u32) = (1200, 600);
const FEATURE_IMPORTANCE_SIZE: (u32, u32) = (1000, 600);

/// Font for every chart label, bundled so rendering never depends on host fonts
const CHART_FONT: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts/DejaVuSans.ttf"));
const CHART_FONT_FAMILY: &str = "sans-serif";

static FONT_REGISTRATION: OnceLock<Result<(), String>> = OnceLock::new();

const GOLD: RGBColor = RGBColor(255, 215, 0);
const SILVER: RGBColor = RGBColor(192, 192, 192);
const BRONZE: RGBColor = RGBColor(205, 127, 50);
const PURPLE: RGBColor = RGBColor(128, 0, 128);
const DEFAULT_BAR: RGBColor = RGBColor(31, 119, 180);

/// Bar color for the team at `position` in the standings
pub fn bar_color(position: usize) -> RGBColor {
    match position {
        0 => GOLD,
        1 => SILVER,
        2 => BRONZE,
        3 => PURPLE,
        _ => DEFAULT_BAR,
    }
}

/// Registers the bundled font with plotters, once per process
fn register_chart_font() -> Result<(), ChartError> {
    FONT_REGISTRATION
        .get_or_init(|| {
            register_font(CHART_FONT_FAMILY, FontStyle::Normal, CHART_FONT)
                .map_err(|_| "bundled chart font is not a valid TrueType font".to_string())
        })
        .clone()
        .map_err(ChartError::Draw)
}

/// Draws the dashboard charts into the public asset directory.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    output_dir: PathBuf,
}

impl ChartRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn paths(&self) -> ChartPaths {
        ChartPaths {
            team_points: self.output_dir.join(TEAM_POINTS_FILE),
            feature_importance: self.output_dir.join(FEATURE_IMPORTANCE_FILE),
        }
    }

    /// Renders both charts as PNG images, replacing any previous version.
    ///
    /// Each image is encoded into a temporary file next to its target and renamed
    /// into place, so readers see either the old or the new chart.
    pub fn render(
        &self,
        standings: &[RankingRecord],
        metrics: &ModelMetrics,
    ) -> Result<ChartPaths, ChartError> {
        register_chart_font()?;
        fs::create_dir_all(&self.output_dir)?;
        let paths = self.paths();

        self.write_atomically(&paths.team_points, |tmp| draw_team_points(tmp, standings))?;
        self.write_atomically(&paths.feature_importance, |tmp| draw_feature_importance(tmp, metrics))?;

        info!("Charts written to {}", self.output_dir.display());
        Ok(paths)
    }

    /// Best-effort variant of [`render`](Self::render): failures are logged and dropped.
    pub fn regenerate(&self, standings: &[RankingRecord], metrics: &ModelMetrics) -> Option<ChartPaths> {
        match self.render(standings, metrics) {
            Ok(paths) => Some(paths),
            Err(e) => {
                error!("Error generating visualizations: {}", e);
                None
            }
        }
    }

    fn write_atomically<F>(&self, target: &Path, draw: F) -> Result<(), ChartError>
    where
        F: FnOnce(&Path) -> Result<(), ChartError>,
    {
        // The .png suffix selects the encoder; the file is removed if drawing fails
        let tmp = tempfile::Builder::new()
            .prefix(".chart-")
            .suffix(".png")
            .tempfile_in(&self.output_dir)?;
        draw(tmp.path())?;
        tmp.persist(target).map_err(|e| ChartError::Io(e.error))?;
        Ok(())
    }
}

/// Vertical bar chart of points per team, in standings order.
fn draw_team_points(target: &Path, standings: &[RankingRecord]) -> Result<(), ChartError> {
    {
        let root = BitMapBackend::new(target, TEAM_POINTS_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let slots = standings.len().max(1);
        // u64 keeps the headroom above a u32::MAX total from overflowing
        let max_points = standings.iter().map(|r| u64::from(r.points)).max().unwrap_or(0);
        let y_top = max_points + 1 + max_points / 10;

        let mut chart = ChartBuilder::on(&root)
            .caption("Predicted IPL 2025 Team Points", (CHART_FONT_FAMILY, 28))
            .margin(20)
            .x_label_area_size(190)
            .y_label_area_size(50)
            .build_cartesian_2d((0..slots).into_segmented(), 0u64..y_top)?;

        let team_label = |value: &SegmentValue<usize>| match value {
            SegmentValue::CenterOf(idx) => standings
                .get(*idx)
                .map(|r| r.team.clone())
                .unwrap_or_default(),
            _ => String::new(),
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(slots + 1)
            .x_label_formatter(&team_label)
            .x_label_style((CHART_FONT_FAMILY, 14).into_font().transform(FontTransform::Rotate90))
            .x_desc("Team")
            .y_desc("points")
            .axis_desc_style((CHART_FONT_FAMILY, 16))
            .draw()?;

        chart.draw_series(standings.iter().enumerate().map(|(idx, record)| {
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(idx), 0), (SegmentValue::Exact(idx + 1), u64::from(record.points))],
                bar_color(idx).filled(),
            );
            bar.set_margin(0, 0, 8, 8);
            bar
        }))?;

        root.present()?;
    }
    Ok(())
}

/// Horizontal bar chart of feature importances, first feature on top.
fn draw_feature_importance(target: &Path, metrics: &ModelMetrics) -> Result<(), ChartError> {
    let features: Vec<(&str, f64)> = metrics.feature_importance.iter().collect();
    let slots = features.len().max(1);
    // Segment 0 sits at the bottom of the y axis
    let row_of = |position: usize| slots - 1 - position;

    {
        let root = BitMapBackend::new(target, FEATURE_IMPORTANCE_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let low = features.iter().map(|(_, w)| *w).fold(0.0, f64::min);
        let high = features.iter().map(|(_, w)| *w).fold(0.0, f64::max);
        let high = if high > low { high * 1.1 } else { low + 1.0 };

        let mut chart = ChartBuilder::on(&root)
            .caption("Feature Importance in Prediction Model", (CHART_FONT_FAMILY, 28))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(190)
            .build_cartesian_2d(low..high, (0..slots).into_segmented())?;

        let feature_label = |value: &SegmentValue<usize>| match value {
            SegmentValue::CenterOf(row) if *row < slots => features
                .get(slots - 1 - *row)
                .map(|(name, _)| name.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(slots + 1)
            .y_label_formatter(&feature_label)
            .label_style((CHART_FONT_FAMILY, 14))
            .draw()?;

        chart.draw_series(features.iter().enumerate().map(|(position, (_, weight))| {
            let row = row_of(position);
            let mut bar = Rectangle::new(
                [(0.0, SegmentValue::Exact(row)), (*weight, SegmentValue::Exact(row + 1))],
                DEFAULT_BAR.filled(),
            );
            bar.set_margin(6, 6, 0, 0);
            bar
        }))?;

        root.present()?;
    }
    Ok(())
}
