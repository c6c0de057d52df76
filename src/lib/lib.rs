use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod notes;
pub mod state;

use state::AppState;

/// Builds the application router around the loaded state.
///
/// Cross-origin requests are allowed from any origin, so the browser
/// client may be served from a different host than the API.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/notes", get(notes::routes::list_notes))
        .layer(Extension(state))
        .layer(cors)
}
