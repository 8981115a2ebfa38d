//! Inbound Ports (Driving Ports)
//!
//! The API the host simulation uses to create, look up and transcode cargo.
//! All operations are synchronous; the host serializes access.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{BulkCargoType, Cargo, CargoId, ContainerType};
use crate::error::CargoError;

/// Primary cargo registry API (Driving Port)
pub trait CargoRegistryApi {
    /// Construct and register a container
    fn create_container(
        &mut self,
        id: CargoId,
        destination: &str,
        container_type: ContainerType,
    ) -> Result<Arc<Cargo>, CargoError>;

    /// Construct and register bulk cargo
    fn create_bulk_cargo(
        &mut self,
        id: CargoId,
        destination: &str,
        tonnage: i32,
        bulk_type: BulkCargoType,
    ) -> Result<Arc<Cargo>, CargoError>;

    /// True iff a live cargo holds `id`
    fn exists(&self, id: CargoId) -> bool;

    /// Look up a live cargo
    fn get_by_id(&self, id: CargoId) -> Result<Arc<Cargo>, CargoError>;

    /// Independent copy of the id -> cargo mapping
    fn snapshot(&self) -> HashMap<CargoId, Arc<Cargo>>;

    /// Clear the registry (tests and simulation restarts)
    fn reset(&mut self);

    /// Machine-readable encoding of a cargo
    fn encode(&self, cargo: &Cargo) -> String;

    /// Decode one line into a live cargo
    ///
    /// Fails if the id is already live.
    fn decode(&mut self, line: &str) -> Result<Arc<Cargo>, CargoError>;

    /// Decode a multi-line manifest
    fn load_manifest(&mut self, text: &str) -> Result<Vec<Arc<Cargo>>, CargoError>;

    /// Encode all live cargo as a manifest, ascending by id
    fn dump_manifest(&self) -> String;
}
