//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server-rendered pages and form handlers live under `/form`, `/success`
//! and `/theme`; the structured-status variants under `/api`. The fully
//! client-side variant is a static page served from the `static/` directory,
//! reachable at `/form-client`.

pub mod forms;
pub mod pages;
pub mod theme;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Resolve the static assets directory (client-side variant + stylesheet).
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"))
}

/// Build the application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_path = static_dir();
    let static_service = ServeDir::new(&static_path).append_index_html_on_directories(true);

    Router::new()
        .route("/", get(redirect_root_to_form))
        .route("/form", get(pages::form_page).post(forms::submit_form))
        .route("/form/clear", post(forms::clear_form))
        .route("/form/result", post(forms::submit_form_result))
        .route("/success", get(pages::success_page))
        .route("/theme/toggle", post(theme::toggle_theme))
        .route("/api/form", post(forms::submit_form_api))
        .route("/api/toggle-theme", post(theme::toggle_theme_api))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(&static_path))
        .fallback_service(static_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_root_to_form() -> Redirect {
    Redirect::to("/form")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
