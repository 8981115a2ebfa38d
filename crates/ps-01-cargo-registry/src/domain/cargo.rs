//! Cargo entity and its closed set of variants
//!
//! A `Cargo` can only be created by [`CargoRegistry`](super::CargoRegistry),
//! which enforces id uniqueness. The type implements `Serialize` for reporting
//! but deliberately not `Deserialize`: decoding goes through the registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::bulk::BulkCargoType;
use super::container::ContainerType;

/// Cargo identifier.
///
/// Signed so that negative ids can be requested and rejected at construction.
pub type CargoId = i32;

/// Discriminant of the cargo variants.
///
/// The name doubles as the tag of the encoded line format and as the leading
/// word of the human-readable projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CargoVariant {
    Container,
    BulkCargo,
}

impl CargoVariant {
    pub const ALL: [CargoVariant; 2] = [CargoVariant::Container, CargoVariant::BulkCargo];

    /// Canonical variant name
    pub fn name(&self) -> &'static str {
        match self {
            CargoVariant::Container => "Container",
            CargoVariant::BulkCargo => "BulkCargo",
        }
    }

    /// Number of colon-delimited fields in this variant's encoding
    pub fn field_count(&self) -> usize {
        match self {
            CargoVariant::Container => 4,
            CargoVariant::BulkCargo => 5,
        }
    }

    /// Look up a variant by its exact tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == tag)
    }
}

impl fmt::Display for CargoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Variant-specific fields
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "variant")]
pub enum CargoDetails {
    Container {
        container_type: ContainerType,
    },
    BulkCargo {
        tonnage: i32,
        bulk_type: BulkCargoType,
    },
}

impl CargoDetails {
    pub fn variant(&self) -> CargoVariant {
        match self {
            CargoDetails::Container { .. } => CargoVariant::Container,
            CargoDetails::BulkCargo { .. } => CargoVariant::BulkCargo,
        }
    }
}

/// A unit of freight tracked by id and destination.
///
/// Equality and hashing consider only `id` and `destination`. Two cargo that
/// differ only in their variant fields compare equal.
#[derive(Clone, Debug, Serialize)]
pub struct Cargo {
    id: CargoId,
    destination: String,
    #[serde(flatten)]
    details: CargoDetails,
}

impl Cargo {
    /// Build the value. Callers must have validated id and details.
    pub(crate) fn new(id: CargoId, destination: String, details: CargoDetails) -> Self {
        Self {
            id,
            destination,
            details,
        }
    }

    pub fn id(&self) -> CargoId {
        self.id
    }

    /// Destination port; free-form text
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn variant(&self) -> CargoVariant {
        self.details.variant()
    }

    pub fn details(&self) -> &CargoDetails {
        &self.details
    }

    /// Container classification, `None` for bulk cargo
    pub fn container_type(&self) -> Option<ContainerType> {
        match self.details {
            CargoDetails::Container { container_type } => Some(container_type),
            CargoDetails::BulkCargo { .. } => None,
        }
    }

    /// Bulk commodity classification, `None` for containers
    pub fn bulk_type(&self) -> Option<BulkCargoType> {
        match self.details {
            CargoDetails::BulkCargo { bulk_type, .. } => Some(bulk_type),
            CargoDetails::Container { .. } => None,
        }
    }

    /// Weight in tonnes, `None` for containers
    pub fn tonnage(&self) -> Option<i32> {
        match self.details {
            CargoDetails::BulkCargo { tonnage, .. } => Some(tonnage),
            CargoDetails::Container { .. } => None,
        }
    }
}

impl PartialEq for Cargo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.destination == other.destination
    }
}

impl Eq for Cargo {}

impl Hash for Cargo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.destination.hash(state);
    }
}

impl fmt::Display for Cargo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} to {}", self.variant(), self.id, self.destination)
    }
}
