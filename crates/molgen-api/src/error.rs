//! Error types for the generator API.
//!
//! [`ApiError`] is what request handlers return; its
//! [`IntoResponse`](axum::response::IntoResponse) implementation always
//! produces a `{ "error": <message> }` body. [`StateError`] covers building
//! the shared state at startup.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use molgen_core::{GenerateError, RegistryError};
use molgen_types::ErrorBody;

/// Errors a request handler can return.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Category validation or generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// The generated algorithm could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Generate(GenerateError::InvalidCategory) => StatusCode::BAD_REQUEST,
            Self::Generate(GenerateError::GenerationFailure(_)) | Self::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message returned to the client. Never includes internal detail.
    pub fn client_message(&self) -> String {
        match self {
            Self::Generate(e) => e.to_string(),
            Self::Serialization(_) => {
                GenerateError::GenerationFailure(String::new()).to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.client_message(),
        };
        (self.status(), axum::Json(body)).into_response()
    }
}

/// Errors that can occur while building [`AppState`](crate::state::AppState).
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The generator registry failed to build.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A static HTML page failed to compile or render.
    #[error("failed to render page {name}: {source}")]
    Page {
        /// Page template name.
        name: &'static str,
        /// The underlying template error.
        source: minijinja::Error,
    },
}
