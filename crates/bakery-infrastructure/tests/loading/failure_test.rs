//! Failed loads leave the cache untouched

use crate::test_utils::{
    CountingBaker, Harness, Inconsistent, Items, Rejected, Unregistered, sample_registry,
};
use bakery_application::ports::{ContainerLoader, ContainerLoaderExt};
use bakery_domain::Error;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[tokio::test]
async fn test_missing_address_is_not_found() {
    let h = Harness::new();

    let err = h.controller.load::<Items>("Missing", None).await.unwrap_err();

    assert!(err.is_not_found(), "unexpected error: {err}");
    assert!(!h.controller.is_loaded::<Items>("Missing").unwrap());
    assert_eq!(h.controller.in_flight_count(), 0);
    assert_eq!(h.bakes(), 0);
    assert_eq!(h.controller.stats().failures, 1);
}

#[tokio::test]
async fn test_empty_address_is_invalid_argument() {
    let h = Harness::new();

    let err = h.controller.load::<Items>("  ", None).await.unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(h.resolves(), 0);
}

#[tokio::test]
async fn test_unregistered_type_is_instantiation_error() {
    let h = Harness::new();

    let err = h.controller.load::<Unregistered>("Config", None).await.unwrap_err();

    assert!(matches!(err, Error::Instantiation { .. }));
    assert_eq!(h.resolves(), 0);
    assert_eq!(h.controller.cached_count(), 0);
}

#[tokio::test]
async fn test_baker_failure_is_bake_error() {
    let h = Harness::with_baker(CountingBaker::failing_first(1));

    let err = h.controller.load::<Items>("Config", None).await.unwrap_err();

    match err {
        Error::Bake { message, source } => {
            assert!(message.contains("Items"));
            assert!(source.is_some());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(h.controller.cached_count(), 0);
    assert_eq!(h.resolver.outstanding_handles(), 0);
}

#[tokio::test]
async fn test_retry_after_failure_loads_again() {
    let h = Harness::with_baker(CountingBaker::failing_first(1));

    assert!(h.controller.load::<Items>("Config", None).await.is_err());
    let items = h.controller.load::<Items>("Config", None).await.unwrap();

    assert_eq!(items.rows, 2);
    assert_eq!(h.resolves(), 2);
    assert_eq!(h.bakes(), 2);
}

#[tokio::test]
async fn test_failed_verification_caches_nothing() {
    let h = Harness::new();

    let err = h.controller.load::<Inconsistent>("Config", None).await.unwrap_err();

    assert!(matches!(err, Error::Bake { .. }));
    assert!(err.to_string().contains("unknown item 99"));
    assert!(!h.controller.is_loaded::<Inconsistent>("Config").unwrap());
    assert_eq!(h.resolver.outstanding_handles(), 0);
}

#[tokio::test]
async fn test_failed_verification_disposes_container() {
    let disposals = Arc::new(AtomicUsize::new(0));
    let mut registry = sample_registry();
    let counter = Arc::clone(&disposals);
    registry.register_with("Rejected by verification", move |_span| {
        Ok(Rejected {
            disposals: Arc::clone(&counter),
        })
    });
    let h = Harness::with_registry(registry);

    let err = h.controller.load::<Rejected>("Config", None).await.unwrap_err();

    assert!(matches!(err, Error::Bake { .. }), "unexpected error: {err}");
    assert_eq!(disposals.load(Ordering::SeqCst), 1);
    assert!(!h.controller.is_loaded::<Rejected>("Config").unwrap());
    assert_eq!(h.controller.cached_count(), 0);
    assert_eq!(h.resolver.outstanding_handles(), 0);
}

#[tokio::test]
async fn test_malformed_asset_is_bake_error() {
    let h = Harness::new();
    h.resolver.insert("Broken", "{ not json");

    let err = h.controller.load::<Items>("Broken", None).await.unwrap_err();

    assert!(matches!(err, Error::Bake { .. }));
    assert_eq!(h.controller.in_flight_count(), 0);
}
