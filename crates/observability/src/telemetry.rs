//! Tracing subscriber initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::tui_log_layer;

fn filter_for(config: &ObservabilityConfig) -> EnvFilter {
    match &config.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

/// Initialize tracing with the given configuration.
///
/// Composes env-filter, optional console fmt layer, and the optional TUI
/// log sink into one subscriber and installs it globally. Fails when a
/// global subscriber is already set.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let fmt_layer = config
        .enable_console
        .then_some(tracing_subscriber::fmt::layer());

    Registry::default()
        .with(filter_for(&config))
        .with(fmt_layer)
        .with(tui_log_layer::tui_log_layer(config.log_sink.clone()))
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::info!(service.name = %config.service_name, "tracing initialized");

    Ok(())
}

/// Initialize with default configuration from environment variables.
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}
