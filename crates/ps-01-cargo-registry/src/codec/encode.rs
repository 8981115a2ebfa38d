//! Machine-readable projection

use crate::domain::{Cargo, CargoDetails};

use super::FIELD_SEPARATOR;

/// Types with a machine-readable string encoding
pub trait Encodable {
    fn encode(&self) -> String;
}

impl Encodable for Cargo {
    /// `Container:<id>:<destination>:<type>` or
    /// `BulkCargo:<id>:<destination>:<type>:<tonnage>`
    fn encode(&self) -> String {
        let sep = FIELD_SEPARATOR;
        let head = format!("{}{sep}{}{sep}{}", self.variant(), self.id(), self.destination());
        match self.details() {
            CargoDetails::Container { container_type } => format!("{head}{sep}{container_type}"),
            CargoDetails::BulkCargo { tonnage, bulk_type } => {
                format!("{head}{sep}{bulk_type}{sep}{tonnage}")
            }
        }
    }
}
