use comfy_table::{Table, Cell, ContentArrangement, Attribute, CellAlignment};
use colored::*;

use ipl_dashboard::data::{Loaded, ModelMetrics, RankingRecord, TOP_TEAM_COUNT};

/// Header cell in the shared table style
fn header(title: &str) -> Cell {
    Cell::new(title).fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold)
}

/// Builds the standings table, top teams highlighted in their podium colors
pub fn standings_table(standings: &[RankingRecord]) -> Table {
    let mut table = Table::new();
    table
        .set_header(vec![header("#"), header("Team"), header("Result"), header("Points")])
        .load_preset(comfy_table::presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for (idx, record) in standings.iter().enumerate() {
        let color = match idx {
            0 => comfy_table::Color::Yellow,
            1 => comfy_table::Color::White,
            2 => comfy_table::Color::DarkYellow,
            3 => comfy_table::Color::Magenta,
            _ => comfy_table::Color::Grey,
        };
        let mut team = Cell::new(&record.team).fg(color);
        if idx < TOP_TEAM_COUNT {
            team = team.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            Cell::new(idx + 1).set_alignment(CellAlignment::Center),
            team,
            Cell::new(record.result.as_str()).fg(color),
            Cell::new(record.points).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Builds the feature importance table
pub fn importance_table(metrics: &ModelMetrics) -> Table {
    let mut table = Table::new();
    table
        .set_header(vec![header("Feature"), header("Importance")])
        .load_preset(comfy_table::presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for (feature, weight) in metrics.feature_importance.iter() {
        table.add_row(vec![
            Cell::new(feature).fg(comfy_table::Color::Green),
            Cell::new(format!("{:.4}", weight)).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Prints the standings and model summary to the console
pub fn print_standings(standings: &Loaded<Vec<RankingRecord>>, metrics: &Loaded<ModelMetrics>) {
    for reason in [standings.reason(), metrics.reason()].into_iter().flatten() {
        println!("{}", format!("Using sample data: {}", reason).yellow());
    }

    println!("\n{}", "Predicted IPL 2025 Standings".bright_cyan().bold());
    println!("{}", standings_table(standings.data()));

    let model = metrics.data();
    println!(
        "\n{} {} ({})",
        "Best model:".bright_cyan().bold(),
        model.best_model.green(),
        format!("{:.2}% accuracy", model.accuracy).bright_green()
    );
    println!("{}", importance_table(model));
}
