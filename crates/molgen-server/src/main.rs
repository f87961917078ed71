//! HTTP server binary for the molgen algorithm generator.
//!
//! Loads configuration, initializes structured logging, builds the
//! generator registry and static pages, and serves the API until a
//! shutdown signal arrives.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `molgen-config.yaml` (or `MOLGEN_CONFIG`)
//!    under a bootstrap subscriber, so config diagnostics are printed
//! 2. Initialize structured logging (tracing) from the loaded config
//! 3. Build the application state
//! 4. Serve HTTP until `Ctrl-C` or `SIGTERM`

mod error;

use std::sync::Arc;

use molgen_api::{AppState, ServerConfig};
use molgen_core::config::{LogFormat, LoggingConfig, ServerSection, ServiceConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::ServerAppError;

/// Application entry point for the molgen server.
///
/// # Errors
///
/// Returns an error if configuration, state construction, or the server
/// itself fails.
#[tokio::main]
async fn main() -> Result<(), ServerAppError> {
    // 1. Load configuration. The global subscriber depends on it, so a
    //    scoped bootstrap subscriber reports anything `load` logs.
    let config = tracing::subscriber::with_default(
        bootstrap_subscriber(std::io::stderr),
        ServiceConfig::load,
    )?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!(
        host = %config.server.host,
        port = config.server.port,
        log_format = ?config.logging.format,
        "molgen-server starting"
    );

    // 3. Build the registry, templates and pre-rendered pages.
    let state = Arc::new(AppState::new()?);
    info!(
        categories = state.registry.categories().len(),
        "Generator registry ready"
    );

    // 4. Serve until shutdown.
    molgen_api::start_server(&server_config(&config.server), state).await?;

    info!("molgen-server shutdown complete");
    Ok(())
}

/// Plain subscriber used before the configuration is known.
fn bootstrap_subscriber<W>(writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(writer)
        .finish()
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = env_filter(logging);
    match logging.format {
        LogFormat::Pretty => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn server_config(section: &ServerSection) -> ServerConfig {
    ServerConfig {
        host: section.host.clone(),
        port: section.port,
    }
}
