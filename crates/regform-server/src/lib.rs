//! Development host for the registration page
//!
//! Serves the first paint of the form and the wasm-pack output. No form data
//! ever reaches the server: validation, persistence and the summary all run
//! in the browser.

use axum::{extract::State, response::Html, routing::get, Router};
use regform::{view, Config, FormConfig, FormData, FormState};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    form: Arc<FormConfig>,
}

pub fn router(config: &Config) -> Router {
    let state = AppState {
        form: Arc::new(config.form.clone()),
    };

    Router::new()
        .route("/", get(index_handler))
        .nest_service("/pkg", ServeDir::new(&config.server.pkg_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    debug!("rendering registration page");
    let form = FormState::new(FormData::default(), state.form.gate_errors_on_touch);
    Html(view::page(&form, &state.form).into_string())
}
