//! Outbound Ports (Driven Ports)
//!
//! The channel through which rejected constructions and decodes are reported
//! to the host. Reporting happens in addition to the `Err` returned to the
//! caller, never instead of it.

use std::fmt;
use tracing::warn;

use crate::error::CargoError;

/// Operation that was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectedOperation {
    CreateContainer,
    CreateBulkCargo,
    Decode,
    LoadManifest,
}

impl fmt::Display for RejectedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RejectedOperation::CreateContainer => "create_container",
            RejectedOperation::CreateBulkCargo => "create_bulk_cargo",
            RejectedOperation::Decode => "decode",
            RejectedOperation::LoadManifest => "load_manifest",
        };
        f.write_str(name)
    }
}

/// A rejected request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub operation: RejectedOperation,
    /// Requested id for constructions, the offending line for decodes
    pub input: String,
    pub error: CargoError,
}

/// Construction failure reporting channel (Driven Port)
pub trait RejectionReporter {
    fn report(&mut self, rejection: &Rejection);
}

/// Discards every report
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpReporter;

impl RejectionReporter for NoOpReporter {
    fn report(&mut self, _rejection: &Rejection) {}
}

/// Logs every report at `warn` level
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl RejectionReporter for TracingReporter {
    fn report(&mut self, rejection: &Rejection) {
        warn!(
            operation = %rejection.operation,
            input = %rejection.input,
            error = %rejection.error,
            "Cargo request rejected"
        );
    }
}

/// Keeps every report in memory
#[derive(Clone, Debug, Default)]
pub struct RecordingReporter {
    rejections: Vec<Rejection>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Remove and return everything recorded so far
    pub fn drain(&mut self) -> Vec<Rejection> {
        std::mem::take(&mut self.rejections)
    }
}

impl RejectionReporter for RecordingReporter {
    fn report(&mut self, rejection: &Rejection) {
        self.rejections.push(rejection.clone());
    }
}
