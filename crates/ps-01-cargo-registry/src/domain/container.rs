//! Container classifications
//!
//! The tokens returned by [`ContainerType::as_str`] are the canonical spelling
//! used by the line format. Parsing is exact and case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a shipping container
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerType {
    /// General dry goods
    Standard,
    /// Refrigerated
    Reefer,
    /// No roof, loaded from above
    OpenTop,
    /// Collapsible sides for oversized goods
    FlatRack,
    Other,
}

impl ContainerType {
    /// Every container type, in declaration order
    pub const ALL: [ContainerType; 5] = [
        ContainerType::Standard,
        ContainerType::Reefer,
        ContainerType::OpenTop,
        ContainerType::FlatRack,
        ContainerType::Other,
    ];

    /// Canonical token for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerType::Standard => "STANDARD",
            ContainerType::Reefer => "REEFER",
            ContainerType::OpenTop => "OPEN_TOP",
            ContainerType::FlatRack => "FLAT_RACK",
            ContainerType::Other => "OTHER",
        }
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text is not a canonical container type token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownContainerType;

impl FromStr for ContainerType {
    type Err = UnknownContainerType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(UnknownContainerType)
    }
}
