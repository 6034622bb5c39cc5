//! Load tracker tests

use bakery_domain::{AddressKey, CancellationToken, Error};
use bakery_infrastructure::LoadTracker;
use std::sync::Arc;
use std::time::Duration;

struct Items;

fn key(address: &str) -> AddressKey {
    AddressKey::for_type::<Items>(address).unwrap()
}

#[test]
fn test_begin_and_drop_guard() {
    let tracker = LoadTracker::new();
    let parent = CancellationToken::new();

    {
        let tracked = tracker.begin(&key("Config"), &parent).unwrap();
        assert_eq!(tracked.key(), &key("Config"));
        assert!(tracker.contains(&key("Config")));
        assert_eq!(tracker.len(), 1);
        assert!(tracker.get(&key("Config")).is_some());
    }

    assert!(tracker.is_empty());
}

#[test]
fn test_duplicate_begin_is_already_tracked() {
    let tracker = LoadTracker::new();
    let parent = CancellationToken::new();
    let _tracked = tracker.begin(&key("Config"), &parent).unwrap();

    let err = tracker.begin(&key("Config"), &parent).unwrap_err();

    assert!(matches!(err, Error::AlreadyTracked { .. }));
    assert_eq!(tracker.len(), 1);
}

#[test]
fn test_end_is_idempotent() {
    let tracker = LoadTracker::new();
    let tracked = tracker.begin(&key("Config"), &CancellationToken::new()).unwrap();

    assert!(tracker.end(&key("Config")));
    assert!(!tracker.end(&key("Config")));
    drop(tracked);
    assert!(tracker.is_empty());
}

#[test]
fn test_cancel_one_load() {
    let tracker = LoadTracker::new();
    let parent = CancellationToken::new();
    let config = tracker.begin(&key("Config"), &parent).unwrap();
    let alt = tracker.begin(&key("Alt"), &parent).unwrap();

    assert!(tracker.cancel(&key("Config")));
    assert!(!tracker.cancel(&key("Missing")));

    assert!(config.cancellation().is_cancelled());
    assert!(!alt.cancellation().is_cancelled());
    assert!(!parent.is_cancelled());
}

#[test]
fn test_parent_cancellation_reaches_load() {
    let tracker = LoadTracker::new();
    let parent = CancellationToken::new();
    let tracked = tracker.begin(&key("Config"), &parent).unwrap();

    parent.cancel();

    assert!(tracked.cancellation().is_cancelled());
}

#[test]
fn test_cancel_all() {
    let tracker = LoadTracker::new();
    let parent = CancellationToken::new();
    let a = tracker.begin(&key("A"), &parent).unwrap();
    let b = tracker.begin(&key("B"), &parent).unwrap();

    assert_eq!(tracker.cancel_all(), 2);

    assert!(a.cancellation().is_cancelled());
    assert!(b.cancellation().is_cancelled());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_wait_idle() {
    let tracker = Arc::new(LoadTracker::new());
    tracker.wait_idle().await;

    let waiter = {
        let tracker = Arc::clone(&tracker);
        tokio::spawn(async move {
            let _tracked = tracker.begin(&key("Config"), &CancellationToken::new()).unwrap();
            tokio::time::sleep(Duration::from_millis(50)).await;
        })
    };
    tokio::time::sleep(Duration::from_millis(10)).await;

    tokio::time::timeout(Duration::from_secs(5), tracker.wait_idle())
        .await
        .expect("tracker should become idle");
    waiter.await.unwrap();
    assert!(tracker.is_empty());
}
