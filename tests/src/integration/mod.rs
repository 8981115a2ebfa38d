//! # Integration Flows
//!
//! Host-style scenarios that drive the cargo service the way the port
//! simulation does: load a manifest, query, dump, reset and reload.

pub mod flows;
