//! Error types for the molgen server binary.
//!
//! [`ServerAppError`] is the top-level error type that wraps every failure
//! mode during startup and serving.

/// Top-level error for the server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ServerAppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: molgen_core::config::ConfigError,
    },

    /// Application state (registry, templates, pages) failed to build.
    #[error("state error: {source}")]
    State {
        /// The underlying state error.
        #[from]
        source: molgen_api::StateError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: molgen_api::ServerError,
    },
}
