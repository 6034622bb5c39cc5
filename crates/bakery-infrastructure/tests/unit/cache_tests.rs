//! Container cache tests

use bakery_domain::{AddressKey, Disposable, Result, SheetContainer, SheetDocument};
use bakery_infrastructure::ContainerCache;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
struct Plain;

impl SheetContainer for Plain {
    fn bake(&mut self, _document: SheetDocument) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Pooled {
    disposals: AtomicUsize,
}

impl Disposable for Pooled {
    fn dispose(&self) {
        self.disposals.fetch_add(1, Ordering::SeqCst);
    }
}

impl SheetContainer for Pooled {
    fn bake(&mut self, _document: SheetDocument) -> Result<()> {
        Ok(())
    }

    fn as_disposable(&self) -> Option<&dyn Disposable> {
        Some(self)
    }
}

fn key<T: 'static>(address: &str) -> AddressKey {
    AddressKey::for_type::<T>(address).unwrap()
}

#[test]
fn test_insert_and_get() {
    let cache = ContainerCache::new();
    let value: Arc<dyn SheetContainer> = Arc::new(Plain);

    assert!(cache.insert(key::<Plain>("A"), Arc::clone(&value)).is_none());

    let cached = cache.try_get(&key::<Plain>("A")).expect("cached");
    assert!(Arc::ptr_eq(&cached, &value));
    assert!(cache.contains(&key::<Plain>("A")));
    assert!(cache.try_get(&key::<Pooled>("A")).is_none());
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_last_writer_wins() {
    let cache = ContainerCache::new();
    let first: Arc<dyn SheetContainer> = Arc::new(Plain);
    let second: Arc<dyn SheetContainer> = Arc::new(Plain);

    cache.insert(key::<Plain>("A"), Arc::clone(&first));
    let replaced = cache
        .insert(key::<Plain>("A"), Arc::clone(&second))
        .expect("replaced");

    assert!(Arc::ptr_eq(&replaced, &first));
    assert!(Arc::ptr_eq(&cache.try_get(&key::<Plain>("A")).unwrap(), &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_remove_returns_prior_without_disposing() {
    let cache = ContainerCache::new();
    let pooled = Arc::new(Pooled::default());
    cache.insert(key::<Pooled>("P"), pooled.clone());

    let removed = cache.remove(&key::<Pooled>("P"));

    assert!(removed.is_some());
    assert!(cache.remove(&key::<Pooled>("P")).is_none());
    assert_eq!(pooled.disposals.load(Ordering::SeqCst), 0);
}

#[test]
fn test_clear_disposes_and_counts() {
    let cache = ContainerCache::new();
    let pooled = Arc::new(Pooled::default());
    cache.insert(key::<Pooled>("P"), pooled.clone());
    cache.insert(key::<Plain>("A"), Arc::new(Plain));
    cache.insert(key::<Plain>("B"), Arc::new(Plain));

    assert_eq!(cache.clear(), 3);
    assert!(cache.is_empty());
    assert_eq!(pooled.disposals.load(Ordering::SeqCst), 1);
    assert_eq!(cache.clear(), 0);
}

#[test]
fn test_entry_records_bake_time() {
    let cache = ContainerCache::new();
    let before = chrono::Utc::now();
    cache.insert(key::<Plain>("A"), Arc::new(Plain));

    let entry = cache.entry(&key::<Plain>("A")).expect("entry");

    assert_eq!(entry.key().address(), "A");
    assert!(entry.baked_at() >= before);
    assert_eq!(cache.keys(), vec![key::<Plain>("A")]);
}
