//! HTML for the dashboard and about pages.

use std::fmt::Write;

use crate::charts::{FEATURE_IMPORTANCE_FILE, TEAM_POINTS_FILE};
use super::types::DashboardView;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; background: #f4f6f9; color: #222; }
header { background: #1a237e; color: white; padding: 1em 2em; }
header a { color: #c5cae9; margin-right: 1em; text-decoration: none; }
main { padding: 1.5em 2em; }
.notice { background: #fff3cd; border: 1px solid #ffe08a; padding: 0.8em 1em; border-radius: 6px; }
.cards { display: flex; gap: 1em; flex-wrap: wrap; }
.card { background: white; border-radius: 8px; padding: 1em 1.5em; box-shadow: 0 2px 4px rgba(0,0,0,0.1); min-width: 180px; }
.rank-1 { border-top: 6px solid gold; }
.rank-2 { border-top: 6px solid silver; }
.rank-3 { border-top: 6px solid #cd7f32; }
.rank-4 { border-top: 6px solid purple; }
table { border-collapse: collapse; background: white; width: 100%; }
th, td { padding: 0.5em 1em; border-bottom: 1px solid #ddd; text-align: left; }
img { max-width: 100%; background: white; border-radius: 8px; }
footer { color: #777; padding: 1em 2em; font-size: 0.85em; }
"#;

/// Escapes text for use inside HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page(title: &str, body: &str, footer: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<header>
<h1>IPL 2025 Predictions</h1>
<nav><a href="/">Dashboard</a><a href="/about">About</a><a href="/api/predictions">Predictions API</a><a href="/api/metrics">Metrics API</a></nav>
</header>
<main>
{body}
</main>
<footer>{footer}</footer>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut body = String::new();

    if !view.fallback_reasons.is_empty() {
        body.push_str("<p class=\"notice\">Some data sources could not be read; sample data is shown.");
        for reason in &view.fallback_reasons {
            let _ = write!(body, "<br><small>{}</small>", escape_html(reason));
        }
        body.push_str("</p>\n");
    }

    body.push_str("<h2>Predicted Top 4</h2>\n<div class=\"cards\">\n");
    for (idx, team) in view.top_teams.iter().enumerate() {
        let _ = writeln!(
            body,
            "<div class=\"card rank-{}\"><h3>{}</h3><p>{}</p><p><strong>{}</strong> points</p></div>",
            idx + 1,
            escape_html(&team.team),
            escape_html(team.result.as_str()),
            team.points,
        );
    }
    body.push_str("</div>\n");

    let _ = writeln!(
        body,
        "<h2>Model Performance</h2>\n<div class=\"cards\"><div class=\"card\"><h3>Best model</h3><p>{}</p></div><div class=\"card\"><h3>Accuracy</h3><p>{:.2}%</p></div></div>",
        escape_html(&view.model.name),
        view.model.accuracy,
    );

    body.push_str("<h2>Predicted Standings</h2>\n<table>\n<tr><th>#</th><th>Team</th><th>Result</th><th>Points</th></tr>\n");
    for (idx, team) in view.predictions.iter().enumerate() {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            idx + 1,
            escape_html(&team.team),
            escape_html(team.result.as_str()),
            team.points,
        );
    }
    body.push_str("</table>\n");

    let _ = writeln!(
        body,
        "<h2>Team Points</h2>\n<img src=\"/static/{}\" alt=\"Predicted IPL 2025 team points\">",
        TEAM_POINTS_FILE,
    );

    body.push_str("<h2>Feature Importance</h2>\n<table>\n<tr><th>Feature</th><th>Importance</th></tr>\n");
    for (feature, weight) in view.feature_importance.iter() {
        let _ = writeln!(body, "<tr><td>{}</td><td>{:.4}</td></tr>", escape_html(feature), weight);
    }
    body.push_str("</table>\n");
    let _ = writeln!(
        body,
        "<img src=\"/static/{}\" alt=\"Feature importance in prediction model\">",
        FEATURE_IMPORTANCE_FILE,
    );

    let footer = format!("Rendered {}", escape_html(&view.rendered_at));
    page("IPL 2025 Predictions Dashboard", &body, &footer)
}

pub fn render_about() -> String {
    let body = r#"<h2>About this dashboard</h2>
<p>This dashboard presents predicted final standings for the IPL 2025 season,
produced ahead of time by a gradient-boosted classifier trained on historical
match results.</p>
<h3>Features used by the model</h3>
<ul>
<li><strong>batting_strength</strong>: aggregate batting quality of the squad</li>
<li><strong>bowling_strength</strong>: aggregate bowling quality of the squad</li>
<li><strong>consistency</strong>: how steady results have been across seasons</li>
<li><strong>historical_win_rate</strong>: share of matches won in past seasons</li>
<li><strong>head_to_head_win_rate</strong>: record against the other franchises</li>
<li><strong>venue_win_rate</strong>: record at the grounds used this season</li>
</ul>
<h3>Data</h3>
<p>The standings and model metrics are read from files prepared offline.
The JSON endpoints <a href="/api/predictions">/api/predictions</a> and
<a href="/api/metrics">/api/metrics</a> expose the same data the dashboard shows.</p>
<p>Predictions are for entertainment and analysis only.</p>
"#;
    page("About - IPL 2025 Predictions", body, "IPL 2025 Predictions Dashboard")
}
