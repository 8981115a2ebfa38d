//! Multi-line manifests, one encoded cargo per line

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::{Cargo, CargoRegistry, ManifestConfig};
use crate::error::ManifestError;

use super::decode::decode;
use super::encode::Encodable;

/// Encode every live cargo, ascending by id, one `\n`-terminated line each
pub fn encode_manifest(registry: &CargoRegistry) -> String {
    let mut out = String::new();
    for id in registry.ids() {
        if let Ok(cargo) = registry.get_by_id(id) {
            out.push_str(&cargo.encode());
            out.push('\n');
        }
    }
    out
}

/// Decode a manifest into `registry`, in line order.
///
/// Uses the registry's [`ManifestConfig`]. When the manifest is atomic, a
/// failing line unregisters every cargo decoded earlier in the same call.
pub fn decode_manifest(
    registry: &mut CargoRegistry,
    text: &str,
) -> Result<Vec<Arc<Cargo>>, ManifestError> {
    let config: ManifestConfig = registry.config().manifest.clone();
    let mut decoded: Vec<Arc<Cargo>> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if config.skip_blank_lines && line.trim().is_empty() {
            continue;
        }

        match decode(registry, line) {
            Ok(cargo) => decoded.push(cargo),
            Err(source) => {
                if config.atomic {
                    for cargo in &decoded {
                        registry.remove(cargo.id());
                    }
                    debug!(
                        rolled_back = decoded.len(),
                        "Manifest rolled back after failed line"
                    );
                }
                return Err(ManifestError {
                    line: index + 1,
                    source,
                });
            }
        }
    }

    info!(loaded = decoded.len(), "Cargo manifest decoded");
    Ok(decoded)
}
