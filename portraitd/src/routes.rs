//! HTTP routes.
//!
//! - `GET /`          plain-text pointer to the portrait page
//! - `GET /portrait`  the rendered portrait view, also at `/portrait/`
//! - anything else    static files from the public directory

use std::path::Path;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const INDEX_TEXT: &str = "for portrait, go to /portrait";

#[derive(Debug, Clone)]
pub struct AppState {
    portrait_html: Bytes,
}

impl AppState {
    pub fn new(portrait_html: String) -> Self {
        Self {
            portrait_html: Bytes::from(portrait_html),
        }
    }
}

pub fn router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/portrait", get(portrait))
        .route("/portrait/", get(portrait))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> &'static str {
    INDEX_TEXT
}

async fn portrait(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.portrait_html.clone())
}
