//! Codec Layer
//!
//! Conversion between cargo and the colon-delimited line format:
//!
//! ```text
//! Container:<id>:<destination>:<ContainerType>
//! BulkCargo:<id>:<destination>:<BulkCargoType>:<tonnage>
//! ```

pub mod decode;
pub mod encode;
pub mod manifest;

/// Field separator of the line format
pub const FIELD_SEPARATOR: char = ':';

pub use decode::decode;
pub use encode::Encodable;
pub use manifest::{decode_manifest, encode_manifest};
