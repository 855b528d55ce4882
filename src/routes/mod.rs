//! HTTP surface: shared state and router construction.

pub mod save;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use tower_http::trace::TraceLayer;

use crate::storage::TextStore;

/// State shared by all request handlers.
///
/// The store handle is injected at construction, so handlers can be
/// exercised against a substitute handle in tests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TextStore>,
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/save", post(save::save_text))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
