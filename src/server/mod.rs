mod pages;
mod routes;
mod server;
mod types;

pub use pages::{escape_html, render_about, render_dashboard};
pub use server::{build_router, ApiServer, AppState};
pub use types::{DashboardView, ModelSummary};
