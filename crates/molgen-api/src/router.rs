//! Axum router construction for the generator API.
//!
//! Assembles all routes into a single [`Router`] with CORS enabled so the
//! UI page can be served from another origin, and HTTP tracing on every
//! request.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the generator API.
///
/// The router includes:
/// - `GET /` -- interactive generator page
/// - `POST /generate` -- generate an algorithm description
/// - `GET /generate` -- list available algorithm types
/// - `GET /docs` -- HTML docs (`?format=json` for OpenAPI JSON)
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/generate",
            get(handlers::generate_info).post(handlers::generate),
        )
        .route("/docs", get(handlers::docs))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
