//! Single-flight gate tests

use bakery_domain::CancellationToken;
use bakery_infrastructure::SingleFlightGate;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_acquire_and_release() {
    let gate = SingleFlightGate::new();
    let cancel = CancellationToken::new();

    let permit = gate.acquire(&cancel).await.unwrap();
    assert!(gate.is_held());
    drop(permit);
    assert!(!gate.is_held());
}

#[tokio::test]
async fn test_pre_cancelled_acquire() {
    let gate = SingleFlightGate::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = gate.acquire(&cancel).await.unwrap_err();

    assert!(err.is_cancelled());
    assert!(!gate.is_held());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_waiting_acquire_is_cancellable() {
    let gate = Arc::new(SingleFlightGate::new());
    let _held = gate.acquire(&CancellationToken::new()).await.unwrap();

    let cancel = CancellationToken::new();
    let waiter = {
        let gate = Arc::clone(&gate);
        let cancel = cancel.clone();
        tokio::spawn(async move { gate.acquire(&cancel).await.map(|_| ()) })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    cancel.cancel();

    assert!(waiter.await.unwrap().unwrap_err().is_cancelled());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_close_fails_waiters_and_later_acquires() {
    let gate = Arc::new(SingleFlightGate::new());
    let held = gate.acquire(&CancellationToken::new()).await.unwrap();

    let waiter = {
        let gate = Arc::clone(&gate);
        tokio::spawn(async move { gate.acquire(&CancellationToken::new()).await.map(|_| ()) })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    gate.close();

    assert!(waiter.await.unwrap().unwrap_err().is_disposed());
    drop(held);
    assert!(gate.is_closed());
    assert!(
        gate.acquire(&CancellationToken::new())
            .await
            .unwrap_err()
            .is_disposed()
    );
}
