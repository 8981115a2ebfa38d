//! Structured logging setup.
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either a
//! human-readable or a JSON fmt layer. Every line carries the target so that
//! registry events (`ps_01_cargo_registry::*`) can be filtered separately.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::{TelemetryConfig, TelemetryError};

/// Build the level filter for a configuration.
///
/// `RUST_LOG` style directives are accepted in `log_level`.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Filter(e.to_string()))
}

/// Install the global subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;

    let fmt_layer = if !config.console_output {
        None
    } else if config.json_logs {
        Some(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .boxed(),
        )
    } else {
        Some(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(true)
                .boxed(),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Logging initialized"
    );
    Ok(())
}

/// Helper to create structured log entries with a `component` field.
#[macro_export]
macro_rules! log_event {
    ($level:ident, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a cargo-related event with standard fields.
#[macro_export]
macro_rules! log_cargo_event {
    ($level:ident, $msg:expr, $cargo:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = "cargo-registry",
            cargo_id = $cargo.id(),
            variant = %$cargo.variant(),
            $($($field)*,)?
            $msg
        )
    };
}
