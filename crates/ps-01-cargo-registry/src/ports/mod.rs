//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for the host simulation
//! - Driven Ports (outbound) - Where construction failures are reported

pub mod inbound;
pub mod outbound;

pub use inbound::CargoRegistryApi;
pub use outbound::{
    NoOpReporter, RecordingReporter, Rejection, RejectedOperation, RejectionReporter,
    TracingReporter,
};
