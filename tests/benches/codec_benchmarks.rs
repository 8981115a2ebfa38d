//! # Port-Sim Codec Benchmarks
//!
//! | Group | Operation |
//! |-------|-----------|
//! | cargo-encode | Single cargo to line |
//! | cargo-decode | Single line into a fresh registry |
//! | manifest | Whole-manifest load and dump |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use ps_01_cargo_registry::{
    decode, decode_manifest, encode_manifest, BulkCargoType, CargoRegistry, ContainerType,
    Encodable,
};
use ps_tests::fixtures::{random_line, random_manifest};

// ============================================================================
// SINGLE CARGO
// ============================================================================

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("cargo-encode");

    let mut registry = CargoRegistry::new();
    let (Ok(container), Ok(bulk)) = (
        registry.create_container(1, "New Zealand", ContainerType::Reefer),
        registry.create_bulk_cargo(2, "France", 12_500, BulkCargoType::Grain),
    ) else {
        panic!("benchmark fixtures must construct");
    };

    group.bench_function("container", |b| b.iter(|| black_box(container.encode())));
    group.bench_function("bulk_cargo", |b| b.iter(|| black_box(bulk.encode())));
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("cargo-decode");

    let mut rng = StdRng::seed_from_u64(11);
    let lines: Vec<String> = (0..64).map(|id| random_line(&mut rng, id)).collect();

    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("valid_lines", |b| {
        b.iter(|| {
            let mut registry = CargoRegistry::new();
            for line in &lines {
                black_box(decode(&mut registry, line).is_ok());
            }
        })
    });

    group.bench_function("rejected_tonnage", |b| {
        b.iter(|| {
            let mut registry = CargoRegistry::new();
            black_box(decode(&mut registry, "BulkCargo:2:France:GRAIN:-5").is_err())
        })
    });
    group.finish();
}

// ============================================================================
// MANIFESTS
// ============================================================================

fn bench_manifest(c: &mut Criterion) {
    let mut group = c.benchmark_group("manifest");
    group.measurement_time(Duration::from_secs(5));

    for size in [100, 1_000, 10_000] {
        let manifest = random_manifest(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("load", size), &manifest, |b, text| {
            b.iter(|| {
                let mut registry = CargoRegistry::new();
                black_box(decode_manifest(&mut registry, text).is_ok())
            })
        });

        let mut registry = CargoRegistry::new();
        if decode_manifest(&mut registry, &manifest).is_err() {
            panic!("generated manifest must load");
        }
        group.bench_with_input(BenchmarkId::new("dump", size), &registry, |b, registry| {
            b.iter(|| black_box(encode_manifest(registry)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_manifest);
criterion_main!(benches);
