//! HTTP endpoint handlers for the generator API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Interactive generator page |
//! | `POST` | `/generate` | Generate an algorithm description |
//! | `GET` | `/generate` | List available algorithm types |
//! | `GET` | `/docs` | HTML docs, or OpenAPI JSON with `?format=json` |

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use molgen_core::GenerateError;
use molgen_types::{GenerateRequest, ServiceInfo};
use tracing::{debug, error, warn};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /docs` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct DocsQuery {
    /// `json` selects the OpenAPI document; anything else selects HTML.
    pub format: Option<String>,
}

// ---------------------------------------------------------------------------
// GET / -- interactive page
// ---------------------------------------------------------------------------

/// Serve the interactive generator page.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.pages.index.clone())
}

// ---------------------------------------------------------------------------
// POST /generate
// ---------------------------------------------------------------------------

/// Validate the requested category and run its generator.
///
/// The body is read raw and parsed leniently: an empty body, invalid JSON,
/// or a missing `type` all end up as `400 Invalid algorithm type` rather
/// than an extractor rejection.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = GenerateRequest::from_body(&body);

    let algorithm = match state
        .registry
        .generate(request.algorithm_type.as_deref(), &request.parameters)
    {
        Ok(algorithm) => algorithm,
        Err(e) => {
            match &e {
                GenerateError::InvalidCategory => {
                    warn!(requested = ?request.algorithm_type, "rejected unknown algorithm type");
                }
                GenerateError::GenerationFailure(detail) => {
                    error!(requested = ?request.algorithm_type, detail = %detail, "algorithm generation failed");
                }
            }
            return Err(e.into());
        }
    };

    let bytes = serde_json::to_vec(&algorithm).map_err(|e| {
        error!(category = %algorithm.category, error = %e, "failed to serialize algorithm");
        ApiError::from(e)
    })?;

    debug!(category = %algorithm.category, bytes = bytes.len(), "generated algorithm");
    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

// ---------------------------------------------------------------------------
// GET /generate
// ---------------------------------------------------------------------------

/// Return the recognized category identifiers and a usage hint.
pub async fn generate_info(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    Json(state.info.clone())
}

// ---------------------------------------------------------------------------
// GET /docs
// ---------------------------------------------------------------------------

/// Serve the documentation page, or the OpenAPI document for `?format=json`.
pub async fn docs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DocsQuery>,
) -> Response {
    if query.format.as_deref() == Some("json") {
        Json(state.openapi.clone()).into_response()
    } else {
        Html(state.pages.docs.clone()).into_response()
    }
}
