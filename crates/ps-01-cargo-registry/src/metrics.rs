//! Metrics hooks for registry operations
//!
//! Counters for constructions, decodes, lookups and resets. The service
//! records into them; hosts read a [`MetricsSnapshot`].
//!
//! ## Usage
//!
//! ```ignore
//! use ps_01_cargo_registry::metrics::RegistryMetrics;
//!
//! let metrics = RegistryMetrics::new();
//! metrics.record_constructed();
//! metrics.record_lookup(false);
//!
//! let snapshot = metrics.snapshot();
//! assert_eq!(snapshot.lookups_missed, 1);
//! ```

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for cargo registry operations
#[derive(Debug, Default)]
pub struct RegistryMetrics {
    /// Cargo constructed directly
    pub cargo_constructed: AtomicU64,
    /// Direct constructions rejected
    pub constructions_rejected: AtomicU64,
    /// Cargo constructed by decoding
    pub cargo_decoded: AtomicU64,
    /// Decodes rejected, at any stage
    pub decodes_rejected: AtomicU64,
    /// Lookups by id
    pub lookups_performed: AtomicU64,
    /// Lookups for ids that were not live
    pub lookups_missed: AtomicU64,
    /// Registry resets
    pub resets: AtomicU64,
}

impl RegistryMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_constructed(&self) {
        self.cargo_constructed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_construction_rejected(&self) {
        self.constructions_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record `count` cargo created by decoding
    pub fn record_decoded(&self, count: u64) {
        self.cargo_decoded.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_decode_rejected(&self) {
        self.decodes_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup and whether the id was live
    pub fn record_lookup(&self, found: bool) {
        self.lookups_performed.fetch_add(1, Ordering::Relaxed);
        if !found {
            self.lookups_missed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_reset(&self) {
        self.resets.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            cargo_constructed: self.cargo_constructed.load(Ordering::Relaxed),
            constructions_rejected: self.constructions_rejected.load(Ordering::Relaxed),
            cargo_decoded: self.cargo_decoded.load(Ordering::Relaxed),
            decodes_rejected: self.decodes_rejected.load(Ordering::Relaxed),
            lookups_performed: self.lookups_performed.load(Ordering::Relaxed),
            lookups_missed: self.lookups_missed.load(Ordering::Relaxed),
            resets: self.resets.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`RegistryMetrics`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub cargo_constructed: u64,
    pub constructions_rejected: u64,
    pub cargo_decoded: u64,
    pub decodes_rejected: u64,
    pub lookups_performed: u64,
    pub lookups_missed: u64,
    pub resets: u64,
}

impl MetricsSnapshot {
    /// Fraction of lookups that found a live cargo, 1.0 when none ran
    pub fn lookup_hit_rate(&self) -> f64 {
        if self.lookups_performed == 0 {
            return 1.0;
        }
        let hits = self.lookups_performed - self.lookups_missed;
        hits as f64 / self.lookups_performed as f64
    }
}
