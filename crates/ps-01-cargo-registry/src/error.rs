//! Error types for the Cargo Registry subsystem

use thiserror::Error;

use crate::domain::{CargoId, CargoVariant};

/// Errors raised by the typed cargo constructors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("Cargo already exists: {id}")]
    IdentityConflict { id: CargoId },

    #[error("Cargo ID must be greater than or equal to 0: {id}")]
    InvalidId { id: CargoId },

    #[error("Bulk cargo tonnage must be greater than or equal to 0: {tonnage}")]
    InvalidTonnage { tonnage: i32 },
}

/// Integer fields of the encoded line format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Id,
    Tonnage,
}

impl std::fmt::Display for NumericField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericField::Id => write!(f, "Cargo id"),
            NumericField::Tonnage => write!(f, "Bulk cargo tonnage"),
        }
    }
}

/// Failure kinds reported through the decode channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    /// Field count other than 4 or 5, or a tag that does not fit its field count
    MalformedStructure,
    /// Id or tonnage text is not an integer
    MalformedNumber,
    /// Type token is not a member of the variant's enum
    InvalidEnumValue,
    /// Id already live in the registry
    IdentityConflict,
    /// Negative id
    InvalidId,
    /// Negative tonnage
    InvalidTonnage,
}

/// Errors produced while decoding a single encoded cargo line
///
/// Every decode failure arrives through this type. Construction failures keep
/// their original [`ConstructionError`] as the error source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Encoded cargo should contain 4 or 5 fields, found {found}")]
    FieldCount { found: usize },

    #[error("Cargo encodings should have a valid type: {tag:?} with {fields} fields")]
    UnknownTag { tag: String, fields: usize },

    #[error("{field} must be an integer: {text:?}")]
    MalformedNumber { field: NumericField, text: String },

    #[error("Invalid {variant} type: {text:?}")]
    InvalidEnumValue { variant: CargoVariant, text: String },

    #[error("Cargo rejected while decoding {line:?}: {source}")]
    Construction {
        line: String,
        #[source]
        source: ConstructionError,
    },
}

impl DecodeError {
    /// The taxonomy kind of this failure
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::FieldCount { .. } | DecodeError::UnknownTag { .. } => {
                DecodeErrorKind::MalformedStructure
            }
            DecodeError::MalformedNumber { .. } => DecodeErrorKind::MalformedNumber,
            DecodeError::InvalidEnumValue { .. } => DecodeErrorKind::InvalidEnumValue,
            DecodeError::Construction { source, .. } => match source {
                ConstructionError::IdentityConflict { .. } => DecodeErrorKind::IdentityConflict,
                ConstructionError::InvalidId { .. } => DecodeErrorKind::InvalidId,
                ConstructionError::InvalidTonnage { .. } => DecodeErrorKind::InvalidTonnage,
            },
        }
    }

    /// The constructor failure behind this error, if any
    pub fn cause(&self) -> Option<&ConstructionError> {
        match self {
            DecodeError::Construction { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A decode failure inside a multi-line manifest
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Manifest line {line}: {source}")]
pub struct ManifestError {
    /// 1-based line number of the failing entry
    pub line: usize,
    #[source]
    pub source: DecodeError,
}

impl ManifestError {
    pub fn kind(&self) -> DecodeErrorKind {
        self.source.kind()
    }
}

/// Errors returned by the service-level API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CargoError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error("The cargo with the specified id does not exist: {id}")]
    NotFound { id: CargoId },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Invalid registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Initial capacity exceeds maximum: {requested} > {max}")]
    CapacityTooLarge { requested: usize, max: usize },
}
