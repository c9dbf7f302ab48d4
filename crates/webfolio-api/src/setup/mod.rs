//! Application setup and initialization
//!
//! Initialization logic lives here rather than in main.rs so integration
//! tests can assemble the same router the binary serves.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::Result;
use std::sync::Arc;
use webfolio_core::Config;

/// Initialize telemetry, application state, and the router.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry();

    tracing::info!(
        environment = %config.environment,
        "Configuration loaded"
    );

    let state = Arc::new(AppState::new(config.clone()));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
