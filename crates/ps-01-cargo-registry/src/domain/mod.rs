//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - Cargo entity and its closed variant set
//! - Container and bulk commodity classifications
//! - The cargo registry
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod bulk;
pub mod cargo;
pub mod config;
pub mod container;
pub mod registry;

pub use bulk::BulkCargoType;
pub use cargo::{Cargo, CargoDetails, CargoId, CargoVariant};
pub use config::{ManifestConfig, RegistryConfig, RegistryConfigBuilder, MAX_INITIAL_CAPACITY};
pub use container::ContainerType;
pub use registry::CargoRegistry;
