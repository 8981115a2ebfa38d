//! # Port-Sim Telemetry
//!
//! Logging bootstrap for hosts that drive the port simulation.
//!
//! The registry crates only emit `tracing` events. Hosts call
//! [`init_logging`] once at startup to decide where those events go.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ps_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TelemetryConfig::for_component("cargo-registry");
//!     init_logging(&config)?;
//!
//!     // Simulation runs here
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PS_SERVICE_NAME` | `port-sim` | Service name in log lines |
//! | `PS_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `PS_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `PS_JSON_LOGS` | `false` | JSON formatted lines |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Global subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}
