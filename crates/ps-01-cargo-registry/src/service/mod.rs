//! Service Layer
//!
//! Orchestrates the registry, the codec and the rejection channel.

pub mod cargo_service;

pub use cargo_service::CargoService;
