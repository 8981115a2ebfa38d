//! # PS-01 Cargo Registry
//!
//! Cargo identity registry and text codec for the port simulation.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure business logic, no I/O
//!   - `Cargo`: A unit of freight with a unique id and a destination
//!   - `CargoDetails`: Closed set of variants (`Container`, `BulkCargo`)
//!   - `CargoRegistry`: Live id -> cargo mapping with uniqueness enforcement
//!   - `RegistryConfig`: Configuration with validation
//!
//! - **Codec Layer** (`codec/`): Colon-delimited line format
//!   - `Encodable`: Machine-readable projection
//!   - `decode`: Staged validation pipeline that constructs into a registry
//!   - `encode_manifest` / `decode_manifest`: One cargo per line
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `CargoRegistryApi`: Driving port (inbound API)
//!   - `RejectionReporter`: Driven port (construction failure channel)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `CargoService`: Implements `CargoRegistryApi`
//!
//! ## Line Format
//!
//! ```text
//! Container:<id>:<destination>:<ContainerType>
//! BulkCargo:<id>:<destination>:<BulkCargoType>:<tonnage>
//! ```
//!
//! There is no escaping of `:` inside a destination. Destinations containing a
//! colon change the field count and fail to decode.
//!
//! ## Invariants
//!
//! - **Uniqueness**: no two live cargo share an id; a rejected construction never
//!   mutates the registry.
//! - **Decoding is construction**: a decoded cargo is live on success and the
//!   registry is untouched on failure.
//! - **Snapshot isolation**: snapshots are copies of the id -> handle mapping.
//!
//! ## Usage Example
//!
//! ```ignore
//! use ps_01_cargo_registry::{codec, CargoRegistry, ContainerType, Encodable};
//!
//! let mut registry = CargoRegistry::new();
//! let cargo = registry.create_container(55, "New Zealand", ContainerType::Reefer)?;
//! assert_eq!(cargo.to_string(), "Container 55 to New Zealand");
//! assert_eq!(cargo.encode(), "Container:55:New Zealand:REEFER");
//!
//! registry.reset();
//! let decoded = codec::decode(&mut registry, "Container:55:New Zealand:REEFER")?;
//! assert_eq!(decoded, cargo);
//! ```

pub mod codec;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use codec::{decode, decode_manifest, encode_manifest, Encodable};
pub use domain::{
    BulkCargoType, Cargo, CargoDetails, CargoId, CargoRegistry, CargoVariant, ContainerType,
    ManifestConfig, RegistryConfig, RegistryConfigBuilder,
};
pub use error::{
    CargoError, ConfigError, ConstructionError, DecodeError, DecodeErrorKind, ManifestError,
    NumericField,
};
pub use metrics::{MetricsSnapshot, RegistryMetrics};
pub use ports::{
    CargoRegistryApi, NoOpReporter, RecordingReporter, Rejection, RejectionReporter,
    RejectedOperation, TracingReporter,
};
pub use service::CargoService;
