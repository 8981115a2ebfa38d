//! # Port-Sim Test Suite
//!
//! Unified test crate for cross-crate flows and codec benchmarks.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks for the cargo codec
//! └── src/
//!     ├── fixtures.rs   # Deterministic manifest generation
//!     └── integration/  # Host-style flows across crates
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ps-tests
//!
//! # Benchmarks
//! cargo bench -p ps-tests
//! ```

pub mod fixtures;
pub mod integration;
