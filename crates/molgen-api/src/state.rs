//! Shared application state for the generator API.
//!
//! [`AppState`] holds the immutable generator registry plus the static
//! payloads (HTML pages, OpenAPI document, service info) that never change
//! after startup. Nothing in it is mutated while serving, so it is shared
//! across requests behind an [`Arc`](std::sync::Arc) without locking.

use molgen_core::{GeneratorRegistry, catalog};
use molgen_types::ServiceInfo;
use serde_json::Value;

use crate::docs;
use crate::error::StateError;
use crate::pages::Pages;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Debug)]
pub struct AppState {
    /// Category -> generator dispatch table.
    pub registry: GeneratorRegistry,
    /// Pre-rendered HTML pages.
    pub pages: Pages,
    /// OpenAPI document for `GET /docs?format=json`.
    pub openapi: Value,
    /// Payload for `GET /generate`.
    pub info: ServiceInfo,
}

impl AppState {
    /// Build the state with the full six-category registry.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if templates fail to compile or render.
    pub fn new() -> Result<Self, StateError> {
        Self::with_registry(GeneratorRegistry::new()?)
    }

    /// Build the state around an explicit registry.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Page`] if the HTML pages fail to render.
    pub fn with_registry(registry: GeneratorRegistry) -> Result<Self, StateError> {
        Ok(Self {
            registry,
            pages: Pages::render()?,
            openapi: docs::openapi_doc(),
            info: catalog::service_info(),
        })
    }
}
