//! Bulk commodity classifications

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of loose commodity carried as bulk cargo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BulkCargoType {
    Grain,
    Minerals,
    Coal,
    Fuel,
    Other,
}

impl BulkCargoType {
    /// Every bulk cargo type, in declaration order
    pub const ALL: [BulkCargoType; 5] = [
        BulkCargoType::Grain,
        BulkCargoType::Minerals,
        BulkCargoType::Coal,
        BulkCargoType::Fuel,
        BulkCargoType::Other,
    ];

    /// Canonical token for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkCargoType::Grain => "GRAIN",
            BulkCargoType::Minerals => "MINERALS",
            BulkCargoType::Coal => "COAL",
            BulkCargoType::Fuel => "FUEL",
            BulkCargoType::Other => "OTHER",
        }
    }
}

impl fmt::Display for BulkCargoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text is not a canonical bulk cargo type token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownBulkCargoType;

impl FromStr for BulkCargoType {
    type Err = UnknownBulkCargoType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(UnknownBulkCargoType)
    }
}
