//! Staged decoder for the line format
//!
//! Stages run cheapest first and stop at the first failure:
//!
//! 1. Split on `:`, keeping empty trailing fields
//! 2. Field count must be 4 or 5
//! 3. Id must parse as an integer
//! 4. Tag and field count must name a variant
//! 5. Type token must belong to that variant's enum
//! 6. Tonnage must parse as an integer (bulk cargo only)
//! 7. Typed constructor checks identity, id sign and tonnage sign
//!
//! Integer parsing accepts negative text. Range checks belong to the
//! constructor, so `-5` and `abc` fail with different kinds.

use std::sync::Arc;

use crate::domain::{BulkCargoType, Cargo, CargoRegistry, CargoVariant, ContainerType};
use crate::error::{ConstructionError, DecodeError, NumericField};

use super::FIELD_SEPARATOR;

/// Decode one encoded cargo and register it.
///
/// On success the returned cargo is live in `registry`. On failure the registry
/// is unchanged. Decoding an id that is already live fails with an
/// identity conflict.
pub fn decode(registry: &mut CargoRegistry, line: &str) -> Result<Arc<Cargo>, DecodeError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

    let count = fields.len();
    if count != CargoVariant::Container.field_count()
        && count != CargoVariant::BulkCargo.field_count()
    {
        return Err(DecodeError::FieldCount { found: count });
    }

    let id = parse_int(fields[1], NumericField::Id)?;
    let destination = fields[2];

    let rejected = |source: ConstructionError| DecodeError::Construction {
        line: line.to_string(),
        source,
    };

    match CargoVariant::from_tag(fields[0]) {
        Some(variant @ CargoVariant::Container) if count == variant.field_count() => {
            let container_type: ContainerType = fields[3].parse().map_err(|_| {
                DecodeError::InvalidEnumValue {
                    variant,
                    text: fields[3].to_string(),
                }
            })?;
            registry
                .create_container(id, destination, container_type)
                .map_err(rejected)
        }
        Some(variant @ CargoVariant::BulkCargo) if count == variant.field_count() => {
            let bulk_type: BulkCargoType = fields[3].parse().map_err(|_| {
                DecodeError::InvalidEnumValue {
                    variant,
                    text: fields[3].to_string(),
                }
            })?;
            let tonnage = parse_int(fields[4], NumericField::Tonnage)?;
            registry
                .create_bulk_cargo(id, destination, tonnage, bulk_type)
                .map_err(rejected)
        }
        _ => Err(DecodeError::UnknownTag {
            tag: fields[0].to_string(),
            fields: count,
        }),
    }
}

fn parse_int(text: &str, field: NumericField) -> Result<i32, DecodeError> {
    text.parse::<i32>().map_err(|_| DecodeError::MalformedNumber {
        field,
        text: text.to_string(),
    })
}
