//! Cargo Service
//!
//! Implements [`CargoRegistryApi`] on top of a [`CargoRegistry`]. Every
//! rejection goes to the injected [`RejectionReporter`] and to the metrics
//! before the error is returned.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::codec::{self, Encodable};
use crate::domain::{BulkCargoType, Cargo, CargoId, CargoRegistry, ContainerType, RegistryConfig};
use crate::error::{CargoError, ConfigError};
use crate::metrics::{MetricsSnapshot, RegistryMetrics};
use crate::ports::{CargoRegistryApi, Rejection, RejectedOperation, RejectionReporter};

/// Cargo service implementation
pub struct CargoService<R: RejectionReporter> {
    registry: CargoRegistry,
    reporter: R,
    metrics: RegistryMetrics,
}

impl<R: RejectionReporter> CargoService<R> {
    /// Create a service over an empty registry with default configuration
    pub fn new(reporter: R) -> Self {
        Self {
            registry: CargoRegistry::new(),
            reporter,
            metrics: RegistryMetrics::new(),
        }
    }

    /// Create with custom registry configuration
    pub fn with_config(reporter: R, config: RegistryConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            registry: CargoRegistry::with_config(config)?,
            reporter,
            metrics: RegistryMetrics::new(),
        })
    }

    /// Read-only view of the underlying registry
    pub fn registry(&self) -> &CargoRegistry {
        &self.registry
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn reject(
        &mut self,
        operation: RejectedOperation,
        input: String,
        error: CargoError,
    ) -> CargoError {
        match operation {
            RejectedOperation::CreateContainer | RejectedOperation::CreateBulkCargo => {
                self.metrics.record_construction_rejected()
            }
            RejectedOperation::Decode | RejectedOperation::LoadManifest => {
                self.metrics.record_decode_rejected()
            }
        }
        self.reporter.report(&Rejection {
            operation,
            input,
            error: error.clone(),
        });
        error
    }
}

impl<R: RejectionReporter> CargoRegistryApi for CargoService<R> {
    fn create_container(
        &mut self,
        id: CargoId,
        destination: &str,
        container_type: ContainerType,
    ) -> Result<Arc<Cargo>, CargoError> {
        match self.registry.create_container(id, destination, container_type) {
            Ok(cargo) => {
                self.metrics.record_constructed();
                Ok(cargo)
            }
            Err(e) => Err(self.reject(
                RejectedOperation::CreateContainer,
                id.to_string(),
                e.into(),
            )),
        }
    }

    fn create_bulk_cargo(
        &mut self,
        id: CargoId,
        destination: &str,
        tonnage: i32,
        bulk_type: BulkCargoType,
    ) -> Result<Arc<Cargo>, CargoError> {
        match self
            .registry
            .create_bulk_cargo(id, destination, tonnage, bulk_type)
        {
            Ok(cargo) => {
                self.metrics.record_constructed();
                Ok(cargo)
            }
            Err(e) => Err(self.reject(
                RejectedOperation::CreateBulkCargo,
                id.to_string(),
                e.into(),
            )),
        }
    }

    fn exists(&self, id: CargoId) -> bool {
        self.registry.exists(id)
    }

    fn get_by_id(&self, id: CargoId) -> Result<Arc<Cargo>, CargoError> {
        let result = self.registry.get_by_id(id);
        self.metrics.record_lookup(result.is_ok());
        result
    }

    fn snapshot(&self) -> HashMap<CargoId, Arc<Cargo>> {
        self.registry.snapshot()
    }

    fn reset(&mut self) {
        self.registry.reset();
        self.metrics.record_reset();
    }

    fn encode(&self, cargo: &Cargo) -> String {
        cargo.encode()
    }

    fn decode(&mut self, line: &str) -> Result<Arc<Cargo>, CargoError> {
        match codec::decode(&mut self.registry, line) {
            Ok(cargo) => {
                self.metrics.record_decoded(1);
                Ok(cargo)
            }
            Err(e) => {
                debug!(kind = ?e.kind(), "Decode rejected");
                Err(self.reject(RejectedOperation::Decode, line.to_string(), e.into()))
            }
        }
    }

    fn load_manifest(&mut self, text: &str) -> Result<Vec<Arc<Cargo>>, CargoError> {
        match codec::decode_manifest(&mut self.registry, text) {
            Ok(loaded) => {
                self.metrics.record_decoded(loaded.len() as u64);
                Ok(loaded)
            }
            Err(e) => {
                let input = text
                    .lines()
                    .nth(e.line.saturating_sub(1))
                    .unwrap_or_default()
                    .to_string();
                info!(line = e.line, kind = ?e.kind(), "Manifest load failed");
                Err(self.reject(RejectedOperation::LoadManifest, input, e.into()))
            }
        }
    }

    fn dump_manifest(&self) -> String {
        codec::encode_manifest(&self.registry)
    }
}
