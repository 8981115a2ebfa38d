//! # Port Simulation Flows
//!
//! Each test walks a complete host session through [`CargoService`]:
//!
//! 1. Load a manifest
//! 2. Query and dump the registry
//! 3. Reset and reload
//!
//! Logging is captured per test with a scoped subscriber built from
//! [`ps_telemetry::build_filter`], so nothing touches the global default.

#[cfg(test)]
mod tests {
    use ps_01_cargo_registry::{
        BulkCargoType, CargoError, CargoRegistryApi, CargoService, ContainerType, DecodeErrorKind,
        RecordingReporter, RegistryConfigBuilder, RejectedOperation, TracingReporter,
    };
    use ps_telemetry::{build_filter, TelemetryConfig};

    use crate::fixtures::random_manifest;

    fn with_test_logging<T>(f: impl FnOnce() -> T) -> T {
        let config = TelemetryConfig {
            log_level: "ps_01_cargo_registry=debug,ps_tests=debug".to_string(),
            ..Default::default()
        };
        let filter = build_filter(&config).expect("static filter directive");
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    // =========================================================================
    // LOAD / DUMP / RESET
    // =========================================================================

    #[test]
    fn test_dump_reset_reload_restores_registry() {
        with_test_logging(|| {
            let manifest = random_manifest(250, 42);
            let mut service = CargoService::new(TracingReporter);

            let loaded = service.load_manifest(&manifest).unwrap();
            assert_eq!(loaded.len(), 250);
            for cargo in &loaded {
                ps_telemetry::log_cargo_event!(debug, "Loaded", cargo);
            }

            let dumped = service.dump_manifest();
            assert_eq!(dumped, manifest);

            service.reset();
            assert!(service.snapshot().is_empty());

            service.load_manifest(&dumped).unwrap();
            assert_eq!(service.dump_manifest(), manifest);
            assert_eq!(service.metrics().resets, 1);
            assert_eq!(service.metrics().cargo_decoded, 500);
        });
    }

    #[test]
    fn test_reset_frees_ids_for_new_cargo() {
        let mut service = CargoService::new(RecordingReporter::new());
        service
            .create_container(7, "Oman", ContainerType::FlatRack)
            .unwrap();
        service.reset();

        let cargo = service
            .create_bulk_cargo(7, "Oman", 900, BulkCargoType::Fuel)
            .unwrap();
        assert_eq!(service.encode(&cargo), "BulkCargo:7:Oman:FUEL:900");
        assert!(service.reporter().rejections().is_empty());
    }

    // =========================================================================
    // REJECTIONS
    // =========================================================================

    #[test]
    fn test_duplicate_line_rolls_back_whole_manifest() {
        with_test_logging(|| {
            let mut service = CargoService::new(RecordingReporter::new());
            service
                .create_container(1, "Fiji", ContainerType::Standard)
                .unwrap();

            let manifest = "Container:2:Peru:REEFER\n\
                            BulkCargo:3:Peru:GRAIN:10\n\
                            BulkCargo:1:Peru:COAL:4\n";
            let err = service.load_manifest(manifest).unwrap_err();

            match &err {
                CargoError::Manifest(e) => {
                    assert_eq!(e.line, 3);
                    assert_eq!(e.kind(), DecodeErrorKind::IdentityConflict);
                }
                other => panic!("unexpected error: {other}"),
            }
            assert_eq!(service.registry().ids(), vec![1]);

            let rejections = service.reporter_mut().drain();
            assert_eq!(rejections.len(), 1);
            assert_eq!(rejections[0].operation, RejectedOperation::LoadManifest);
            assert_eq!(rejections[0].input, "BulkCargo:1:Peru:COAL:4");
            assert!(service.reporter().rejections().is_empty());
        });
    }

    #[test]
    fn test_non_atomic_manifest_keeps_prefix() {
        let config = RegistryConfigBuilder::new()
            .atomic_manifests(false)
            .build()
            .unwrap();
        let mut service = CargoService::with_config(RecordingReporter::new(), config).unwrap();

        let manifest = "Container:1:Apia:OPEN_TOP\nContainer:2:Apia:SIDEWAYS\n";
        let err = service.load_manifest(manifest).unwrap_err();

        assert!(matches!(err, CargoError::Manifest(ref e) if e.line == 2));
        assert_eq!(service.registry().ids(), vec![1]);
    }

    #[test]
    fn test_lookup_metrics_track_misses() {
        let mut service = CargoService::new(TracingReporter);
        service.load_manifest(&random_manifest(10, 3)).unwrap();

        assert!(service.get_by_id(5).is_ok());
        assert!(service.get_by_id(10).is_err());

        let metrics = service.metrics();
        assert_eq!(metrics.lookups_performed, 2);
        assert_eq!(metrics.lookups_missed, 1);
        assert!((metrics.lookup_hit_rate() - 0.5).abs() < f64::EPSILON);
    }
}
