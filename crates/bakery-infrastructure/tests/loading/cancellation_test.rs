//! Cooperative cancellation of loads

use crate::test_utils::{Harness, Items};
use bakery_application::ports::{ContainerLoader, ContainerLoaderExt};
use bakery_domain::CancellationToken;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_pre_cancelled_token_never_loads() {
    let h = Harness::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = h
        .controller
        .load::<Items>("Config", Some(&cancel))
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(h.resolves(), 0);
    assert_eq!(h.controller.cached_count(), 0);
    assert_eq!(h.controller.in_flight_count(), 0);
    assert_eq!(h.controller.stats().cancellations, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cancel_while_waiting_for_gate() {
    let h = Harness::with_latency(Duration::from_millis(300));

    // Occupy the gate with a slow load of another key
    let holder = {
        let controller = Arc::clone(&h.controller);
        tokio::spawn(async move { controller.load::<Items>("Alt", None).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(h.controller.in_flight_count(), 1);

    let cancel = CancellationToken::new();
    let waiter = {
        let controller = Arc::clone(&h.controller);
        let cancel = cancel.clone();
        tokio::spawn(async move { controller.load::<Items>("Config", Some(&cancel)).await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    cancel.cancel();

    let err = waiter.await.unwrap().unwrap_err();
    assert!(err.is_cancelled());
    assert!(!h.controller.is_loaded::<Items>("Config").unwrap());

    holder.await.unwrap().unwrap();
    assert_eq!(h.resolves(), 1);
    assert_eq!(h.controller.in_flight_count(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cancel_mid_flight_releases_everything() {
    let h = Harness::with_latency(Duration::from_secs(30));
    let cancel = CancellationToken::new();

    let load = {
        let controller = Arc::clone(&h.controller);
        let cancel = cancel.clone();
        tokio::spawn(async move { controller.load::<Items>("Config", Some(&cancel)).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(h.controller.in_flight_count(), 1);
    cancel.cancel();

    let err = tokio::time::timeout(Duration::from_secs(5), load)
        .await
        .expect("load should stop promptly")
        .unwrap()
        .unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(h.controller.cached_count(), 0);
    assert_eq!(h.controller.in_flight_count(), 0);
    assert_eq!(h.resolver.outstanding_handles(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cancel_load_by_key() {
    let h = Harness::with_latency(Duration::from_secs(30));

    let load = {
        let controller = Arc::clone(&h.controller);
        tokio::spawn(async move { controller.load::<Items>("Config", None).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(h.controller.cancel_load::<Items>("Config").unwrap());
    assert!(!h.controller.cancel_load::<Items>("Alt").unwrap());

    let err = load.await.unwrap().unwrap_err();
    assert!(err.is_cancelled());
    assert!(!h.controller.is_loaded::<Items>("Config").unwrap());
    assert_eq!(h.controller.in_flight_count(), 0);
    assert_eq!(h.resolver.outstanding_handles(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cancelling_one_caller_does_not_cancel_another() {
    let h = Harness::with_latency(Duration::from_millis(100));
    let cancel = CancellationToken::new();

    let first = {
        let controller = Arc::clone(&h.controller);
        tokio::spawn(async move { controller.load::<Items>("Config", None).await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;

    let second = {
        let controller = Arc::clone(&h.controller);
        let cancel = cancel.clone();
        tokio::spawn(async move { controller.load::<Items>("Config", Some(&cancel)).await })
    };
    tokio::time::sleep(Duration::from_millis(10)).await;
    cancel.cancel();

    assert!(second.await.unwrap().unwrap_err().is_cancelled());
    let items = first.await.unwrap().unwrap();
    assert_eq!(items.rows, 2);
    assert!(h.controller.is_loaded::<Items>("Config").unwrap());
}
