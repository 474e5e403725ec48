use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use ipl_dashboard::charts::{FEATURE_IMPORTANCE_FILE, TEAM_POINTS_FILE};
use ipl_dashboard::config::Settings;
use ipl_dashboard::data::{fallback_standings, FALLBACK_IMPORTANCES, FEATURE_NAMES};
use ipl_dashboard::server::{build_router, AppState};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const PNG_TRAILER: [u8; 8] = [b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82];

const MODEL_JSON: &str = r#"{"feature_importances": [0.3, 0.3, 0.1, 0.1, 0.1, 0.1]}"#;

const STANDINGS_CSV: &str = "\
Team,Result,points
Mumbai Indians,Winner,14
Chennai Super Kings,Runner-up,12
Delhi Capitals,Second Runner-up,11
Punjab Kings,Eliminator,9
Gujarat Titans,Other,7
Rajasthan Royals,Other,4
";

struct Fixture {
    dir: TempDir,
    settings: Settings,
}

impl Fixture {
    /// Settings pointing at an empty scratch directory
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let mut settings = Settings::default();
        settings.data.predictions = dir.path().join("data/predicted_ipl_2025_rankings.csv");
        settings.data.model = dir.path().join("model/best_model.json");
        settings.charts.output_dir = dir.path().join("static");
        settings.logging.directory = None;
        Self { dir, settings }
    }

    fn with_standings(self, csv: &str) -> Self {
        let path = &self.settings.data.predictions;
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, csv).unwrap();
        self
    }

    fn with_model(self, json: &str) -> Self {
        let path = &self.settings.data.model;
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, json).unwrap();
        self
    }

    fn router(&self) -> Router {
        build_router(Arc::new(AppState::from_settings(&self.settings)))
    }

    fn chart(&self, name: &str) -> PathBuf {
        self.dir.path().join("static").join(name)
    }
}

async fn get_bytes(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let (status, bytes) = get_bytes(router, uri).await;
    (status, String::from_utf8(bytes).unwrap())
}

fn assert_complete_png(bytes: &[u8]) {
    assert!(bytes.starts_with(&PNG_SIGNATURE), "missing PNG signature");
    assert!(bytes.ends_with(&PNG_TRAILER), "PNG is truncated");
}

async fn get_json(router: Router, uri: &str) -> Value {
    let (status, body) = get(router, uri).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn test_predictions_round_trip_source_rows() {
    let fixture = Fixture::new().with_standings(STANDINGS_CSV);

    let json = get_json(fixture.router(), "/api/predictions").await;
    let rows = json.as_array().unwrap();

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["Team"], "Mumbai Indians");
    assert_eq!(rows[0]["Result"], "Winner");
    assert_eq!(rows[0]["points"], 14);
    assert_eq!(rows[2]["Result"], "Second Runner-up");
    assert_eq!(rows[5]["Team"], "Rajasthan Royals");
    assert_eq!(rows[5]["points"], 4);
}

#[tokio::test]
async fn test_predictions_fallback_when_file_missing() {
    let fixture = Fixture::new();

    let json = get_json(fixture.router(), "/api/predictions").await;
    let rows = json.as_array().unwrap();

    let expected = fallback_standings();
    assert_eq!(rows.len(), 10);
    for (row, record) in rows.iter().zip(&expected) {
        assert_eq!(row["Team"], record.team.as_str());
        assert_eq!(row["Result"], record.result.as_str());
        assert_eq!(row["points"], record.points);
    }
}

#[tokio::test]
async fn test_predictions_fallback_when_file_malformed() {
    let fixture = Fixture::new().with_standings("Team,Result,points\nMumbai Indians,Winner,lots\n");

    let json = get_json(fixture.router(), "/api/predictions").await;

    assert_eq!(json.as_array().unwrap().len(), 10);
    assert_eq!(json[0]["Team"], "Gujarat Titans");
}

#[tokio::test]
async fn test_metrics_fallback_when_model_missing() {
    let fixture = Fixture::new();

    let json = get_json(fixture.router(), "/api/metrics").await;

    assert_eq!(json["best_model"], "XGBoost");
    assert_eq!(json["accuracy"], 97.60);
    assert_eq!(json["feature_importance"]["batting_strength"], 0.35);
    assert_eq!(json["feature_importance"]["bowling_strength"], 0.25);
    assert_eq!(json["feature_importance"]["consistency"], 0.15);
    assert_eq!(json["feature_importance"]["historical_win_rate"], 0.10);
    assert_eq!(json["feature_importance"]["head_to_head_win_rate"], 0.10);
    assert_eq!(json["feature_importance"]["venue_win_rate"], 0.05);
}

#[tokio::test]
async fn test_metrics_schema_keys() {
    let fixture = Fixture::new()
        .with_model(MODEL_JSON);

    let json = get_json(fixture.router(), "/api/metrics").await;

    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["accuracy", "best_model", "feature_importance"]);

    let importance = json["feature_importance"].as_object().unwrap();
    assert_eq!(importance.len(), FEATURE_NAMES.len());
    for name in FEATURE_NAMES {
        assert!(importance.contains_key(name));
    }
    assert_eq!(importance["batting_strength"], 0.3);
}

#[tokio::test]
async fn test_metrics_fallback_on_feature_count_mismatch() {
    let fixture = Fixture::new().with_model(r#"{"feature_importances": [0.6, 0.4]}"#);

    let json = get_json(fixture.router(), "/api/metrics").await;
    let importance = json["feature_importance"].as_object().unwrap();

    assert_eq!(importance.len(), 6);
    for (name, weight) in FEATURE_NAMES.iter().zip(FALLBACK_IMPORTANCES) {
        assert_eq!(importance[*name], weight);
    }
}

#[tokio::test]
async fn test_dashboard_top_teams_match_predictions() {
    let fixture = Fixture::new()
        .with_standings(STANDINGS_CSV)
        .with_model(MODEL_JSON);

    let json = get_json(fixture.router(), "/api/predictions").await;
    let (status, html) = get(fixture.router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    let top_section = html.split("Predicted Standings").next().unwrap();
    for (idx, row) in json.as_array().unwrap().iter().enumerate() {
        let team = row["Team"].as_str().unwrap();
        assert_eq!(top_section.contains(team), idx < 4, "unexpected top-team state for {}", team);
    }
    assert!(!html.contains("class=\"notice\""));
}

#[tokio::test]
async fn test_dashboard_writes_charts_from_real_data() {
    let fixture = Fixture::new()
        .with_standings(STANDINGS_CSV)
        .with_model(MODEL_JSON);

    let (status, _) = get(fixture.router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_complete_png(&fs::read(fixture.chart(TEAM_POINTS_FILE)).unwrap());
    assert_complete_png(&fs::read(fixture.chart(FEATURE_IMPORTANCE_FILE)).unwrap());
}

#[tokio::test]
async fn test_dashboard_renders_points_near_u32_max() {
    let fixture = Fixture::new()
        .with_standings("Team,Result,points\nBig Hitters,Winner,4000000000\nSlow Starters,Other,12\n")
        .with_model(MODEL_JSON);

    let (status, html) = get(fixture.router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Big Hitters"));
    assert_complete_png(&fs::read(fixture.chart(TEAM_POINTS_FILE)).unwrap());
    assert_complete_png(&fs::read(fixture.chart(FEATURE_IMPORTANCE_FILE)).unwrap());
}

#[tokio::test]
async fn test_concurrent_dashboard_renders_leave_complete_charts() {
    let fixture = Fixture::new()
        .with_standings(STANDINGS_CSV)
        .with_model(MODEL_JSON);
    let router = fixture.router();

    let mut requests = tokio::task::JoinSet::new();
    for _ in 0..8 {
        let router = router.clone();
        requests.spawn(async move { get(router, "/").await.0 });
    }
    while let Some(status) = requests.join_next().await {
        assert_eq!(status.unwrap(), StatusCode::OK);
    }

    assert_complete_png(&fs::read(fixture.chart(TEAM_POINTS_FILE)).unwrap());
    assert_complete_png(&fs::read(fixture.chart(FEATURE_IMPORTANCE_FILE)).unwrap());
    // Temporary files are all renamed or removed
    assert_eq!(fs::read_dir(fixture.dir.path().join("static")).unwrap().count(), 2);
}

#[tokio::test]
async fn test_dashboard_writes_charts_from_fallback_data() {
    let fixture = Fixture::new();

    let (status, html) = get(fixture.router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("class=\"notice\""));
    assert!(html.contains("Gujarat Titans"));
    assert!(fixture.chart(TEAM_POINTS_FILE).is_file());
    assert!(fixture.chart(FEATURE_IMPORTANCE_FILE).is_file());
}

#[tokio::test]
async fn test_dashboard_charts_are_served() {
    let fixture = Fixture::new();

    get(fixture.router(), "/").await;
    let (status, png) = get_bytes(fixture.router(), &format!("/static/{}", TEAM_POINTS_FILE)).await;

    assert_eq!(status, StatusCode::OK);
    assert_complete_png(&png);
}

#[tokio::test]
async fn test_about_page_is_static() {
    let fixture = Fixture::new();

    let (status, html) = get(fixture.router(), "/about").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("About this dashboard"));
    assert!(!fixture.chart(TEAM_POINTS_FILE).exists());
}
