//! # Cargo Registry
//!
//! Live id -> cargo mapping. The registry is the only place a [`Cargo`] can be
//! constructed, so every cargo in existence is registered under its id.
//!
//! Construction is an atomic check-and-insert: all validation runs before the
//! entry is written, so a rejected request never touches the map.
//!
//! The registry is an explicit object. Hosts create one per simulation run and
//! pass it by reference. It holds no lock; mutation takes `&mut self`.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::bulk::BulkCargoType;
use super::cargo::{Cargo, CargoDetails, CargoId};
use super::config::RegistryConfig;
use super::container::ContainerType;
use crate::error::{CargoError, ConfigError, ConstructionError};

/// Registry of all cargo currently active in the simulation
#[derive(Debug)]
pub struct CargoRegistry {
    entries: HashMap<CargoId, Arc<Cargo>>,
    config: RegistryConfig,
}

impl Default for CargoRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CargoRegistry {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        let config = RegistryConfig::default();
        Self {
            entries: HashMap::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Create an empty registry with a validated configuration
    pub fn with_config(config: RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            entries: HashMap::with_capacity(config.initial_capacity),
            config,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Construct and register a container.
    ///
    /// # Errors
    ///
    /// - `IdentityConflict` if `id` is already live
    /// - `InvalidId` if `id < 0`
    pub fn create_container(
        &mut self,
        id: CargoId,
        destination: impl Into<String>,
        container_type: ContainerType,
    ) -> Result<Arc<Cargo>, ConstructionError> {
        self.insert(
            id,
            destination.into(),
            CargoDetails::Container { container_type },
        )
    }

    /// Construct and register bulk cargo.
    ///
    /// # Errors
    ///
    /// - `IdentityConflict` if `id` is already live
    /// - `InvalidId` if `id < 0`
    /// - `InvalidTonnage` if `tonnage < 0`
    pub fn create_bulk_cargo(
        &mut self,
        id: CargoId,
        destination: impl Into<String>,
        tonnage: i32,
        bulk_type: BulkCargoType,
    ) -> Result<Arc<Cargo>, ConstructionError> {
        self.insert(
            id,
            destination.into(),
            CargoDetails::BulkCargo { tonnage, bulk_type },
        )
    }

    fn insert(
        &mut self,
        id: CargoId,
        destination: String,
        details: CargoDetails,
    ) -> Result<Arc<Cargo>, ConstructionError> {
        if self.exists(id) {
            return Err(ConstructionError::IdentityConflict { id });
        }
        if id < 0 {
            return Err(ConstructionError::InvalidId { id });
        }
        if let CargoDetails::BulkCargo { tonnage, .. } = details {
            if tonnage < 0 {
                return Err(ConstructionError::InvalidTonnage { tonnage });
            }
        }

        let cargo = Arc::new(Cargo::new(id, destination, details));
        self.entries.insert(id, Arc::clone(&cargo));

        debug!(
            cargo_id = id,
            variant = %cargo.variant(),
            destination = cargo.destination(),
            "Cargo registered"
        );
        Ok(cargo)
    }

    /// True iff a live cargo holds `id`
    pub fn exists(&self, id: CargoId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Get the cargo registered under `id`
    pub fn get_by_id(&self, id: CargoId) -> Result<Arc<Cargo>, CargoError> {
        self.entries
            .get(&id)
            .cloned()
            .ok_or(CargoError::NotFound { id })
    }

    /// Copy of the current id -> cargo mapping.
    ///
    /// Inserting into or removing from the returned map has no effect on the
    /// registry.
    pub fn snapshot(&self) -> HashMap<CargoId, Arc<Cargo>> {
        self.entries.clone()
    }

    /// Drop every entry. Intended for tests and simulation restarts.
    pub fn reset(&mut self) {
        let cleared = self.entries.len();
        self.entries.clear();
        info!(cleared, "Cargo registry reset");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Live ids in ascending order
    pub fn ids(&self) -> Vec<CargoId> {
        let mut ids: Vec<CargoId> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over live cargo in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Cargo>> {
        self.entries.values()
    }

    /// Unregister `id`. Only used to roll back a failed manifest.
    pub(crate) fn remove(&mut self, id: CargoId) -> Option<Arc<Cargo>> {
        self.entries.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_registers_cargo() {
        let mut registry = CargoRegistry::new();
        let cargo = registry
            .create_container(55, "New Zealand", ContainerType::Standard)
            .unwrap();

        assert!(registry.exists(55));
        assert_eq!(registry.len(), 1);
        assert!(Arc::ptr_eq(&registry.get_by_id(55).unwrap(), &cargo));
    }

    #[test]
    fn test_duplicate_id_rejected_without_mutation() {
        let mut registry = CargoRegistry::new();
        registry
            .create_container(10, "Peru", ContainerType::Reefer)
            .unwrap();

        let err = registry
            .create_bulk_cargo(10, "Chile", 3, BulkCargoType::Grain)
            .unwrap_err();
        assert_eq!(err, ConstructionError::IdentityConflict { id: 10 });

        let kept = registry.get_by_id(10).unwrap();
        assert_eq!(kept.destination(), "Peru");
        assert_eq!(kept.container_type(), Some(ContainerType::Reefer));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_negative_id_rejected_for_every_variant() {
        let mut registry = CargoRegistry::new();
        assert_eq!(
            registry
                .create_container(-1, "Peru", ContainerType::Other)
                .unwrap_err(),
            ConstructionError::InvalidId { id: -1 }
        );
        assert_eq!(
            registry
                .create_bulk_cargo(i32::MIN, "Peru", 1, BulkCargoType::Coal)
                .unwrap_err(),
            ConstructionError::InvalidId { id: i32::MIN }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_negative_tonnage_rejected_without_registering() {
        let mut registry = CargoRegistry::new();
        let err = registry
            .create_bulk_cargo(4, "Oman", -5, BulkCargoType::Fuel)
            .unwrap_err();
        assert_eq!(err, ConstructionError::InvalidTonnage { tonnage: -5 });
        assert!(!registry.exists(4));
    }

    #[test]
    fn test_zero_id_and_tonnage_are_valid() {
        let mut registry = CargoRegistry::new();
        registry
            .create_bulk_cargo(0, "", 0, BulkCargoType::Other)
            .unwrap();
        assert!(registry.exists(0));
    }

    #[test]
    fn test_get_missing_id_is_not_found() {
        let registry = CargoRegistry::new();
        assert_eq!(
            registry.get_by_id(3).unwrap_err(),
            CargoError::NotFound { id: 3 }
        );
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let mut registry = CargoRegistry::new();
        registry
            .create_container(1, "Fiji", ContainerType::Standard)
            .unwrap();

        let mut snapshot = registry.snapshot();
        snapshot.remove(&1);
        let stray = registry.get_by_id(1).unwrap();
        snapshot.insert(2, stray);

        assert!(registry.exists(1));
        assert!(!registry.exists(2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reset_clears_and_frees_ids() {
        let mut registry = CargoRegistry::new();
        registry
            .create_container(1, "Fiji", ContainerType::Standard)
            .unwrap();
        registry.reset();

        assert!(registry.is_empty());
        assert!(registry
            .create_container(1, "Samoa", ContainerType::Standard)
            .is_ok());
    }

    #[test]
    fn test_ids_are_sorted() {
        let mut registry = CargoRegistry::new();
        for id in [9, 2, 5] {
            registry
                .create_container(id, "Tonga", ContainerType::Other)
                .unwrap();
        }
        assert_eq!(registry.ids(), vec![2, 5, 9]);
        assert_eq!(registry.iter().count(), 3);
    }

    #[test]
    fn test_with_config_validates() {
        let config = RegistryConfig {
            initial_capacity: usize::MAX,
            ..Default::default()
        };
        assert!(CargoRegistry::with_config(config).is_err());
    }
}
