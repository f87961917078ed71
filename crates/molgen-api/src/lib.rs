//! Axum HTTP API for the molgen drug-discovery algorithm generator.
//!
//! This crate exposes:
//!
//! - **`POST /generate`** -- validate an algorithm type and return its
//!   generated description, or a `{ "error": ... }` body
//! - **`GET /generate`** -- the recognized algorithm types and a usage hint
//! - **`GET /docs`** -- HTML documentation, or an OpenAPI-style JSON
//!   document with `?format=json`
//! - **`GET /`** -- a small interactive page that calls `/generate`
//!
//! # Architecture
//!
//! Every request is independent. Handlers read from an immutable
//! [`AppState`] (generator registry plus pre-rendered static payloads)
//! shared behind an `Arc`; there is no locking and no per-request state.

pub mod docs;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::{ApiError, StateError};
pub use router::build_router;
pub use server::{ServerConfig, ServerError, bind_listener, start_server};
pub use state::AppState;
