//! Registry configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use ps_01_cargo_registry::domain::RegistryConfigBuilder;
//!
//! let config = RegistryConfigBuilder::new()
//!     .initial_capacity(512)
//!     .atomic_manifests(false)
//!     .build()
//!     .expect("Valid config");
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound for the pre-allocated registry size
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// How multi-line manifests are decoded
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Skip lines that are empty or whitespace only
    pub skip_blank_lines: bool,
    /// Roll back every cargo registered by the manifest when a line fails
    pub atomic: bool,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
            atomic: true,
        }
    }
}

/// Cargo registry configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Number of entries to pre-allocate
    pub initial_capacity: usize,
    /// Manifest decoding behaviour
    pub manifest: ManifestConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            manifest: ManifestConfig::default(),
        }
    }
}

impl RegistryConfig {
    /// Validate configuration bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::CapacityTooLarge {
                requested: self.initial_capacity,
                max: MAX_INITIAL_CAPACITY,
            });
        }
        Ok(())
    }
}

/// Builder for RegistryConfig with validation
#[derive(Default)]
pub struct RegistryConfigBuilder {
    initial_capacity: Option<usize>,
    skip_blank_lines: Option<bool>,
    atomic_manifests: Option<bool>,
}

impl RegistryConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of entries to pre-allocate
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }

    /// Skip blank manifest lines instead of rejecting them
    pub fn skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = Some(skip);
        self
    }

    /// Roll back a manifest's cargo when one of its lines fails
    pub fn atomic_manifests(mut self, atomic: bool) -> Self {
        self.atomic_manifests = Some(atomic);
        self
    }

    /// Build the RegistryConfig, validating all parameters
    pub fn build(self) -> Result<RegistryConfig, ConfigError> {
        let defaults = RegistryConfig::default();

        let config = RegistryConfig {
            initial_capacity: self.initial_capacity.unwrap_or(defaults.initial_capacity),
            manifest: ManifestConfig {
                skip_blank_lines: self
                    .skip_blank_lines
                    .unwrap_or(defaults.manifest.skip_blank_lines),
                atomic: self.atomic_manifests.unwrap_or(defaults.manifest.atomic),
            },
        };

        config.validate()?;
        Ok(config)
    }
}
