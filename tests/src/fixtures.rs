//! Deterministic test data for flows and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ps_01_cargo_registry::{BulkCargoType, ContainerType};

const DESTINATIONS: [&str; 8] = [
    "New Zealand",
    "France",
    "Peru",
    "Fiji",
    "Oman",
    "Port Louis",
    "Nuku'alofa",
    "",
];

/// Encoded line for cargo `id`, variant and fields drawn from `rng`.
pub fn random_line(rng: &mut StdRng, id: i32) -> String {
    let destination = DESTINATIONS[rng.gen_range(0..DESTINATIONS.len())];
    if rng.gen_bool(0.5) {
        let t = ContainerType::ALL[rng.gen_range(0..ContainerType::ALL.len())];
        format!("Container:{id}:{destination}:{t}")
    } else {
        let t = BulkCargoType::ALL[rng.gen_range(0..BulkCargoType::ALL.len())];
        let tonnage: i32 = rng.gen_range(0..50_000);
        format!("BulkCargo:{id}:{destination}:{t}:{tonnage}")
    }
}

/// Manifest of `count` cargo with ids `0..count`, reproducible per `seed`.
pub fn random_manifest(count: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::new();
    for id in 0..count {
        out.push_str(&random_line(&mut rng, id as i32));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_is_reproducible() {
        assert_eq!(random_manifest(20, 7), random_manifest(20, 7));
        assert_eq!(random_manifest(20, 7).lines().count(), 20);
    }
}
