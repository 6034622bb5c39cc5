//! Tests for the typed loader extension

use async_trait::async_trait;
use bakery_application::ports::{ContainerLoader, ContainerLoaderExt};
use bakery_domain::{
    AddressKey, CancellationToken, ContainerTypeId, Error, LoaderStats, Result, SheetContainer,
    SheetDocument,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Items;

impl SheetContainer for Items {
    fn bake(&mut self, _document: SheetDocument) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Quests;

impl SheetContainer for Quests {
    fn bake(&mut self, _document: SheetDocument) -> Result<()> {
        Ok(())
    }
}

/// Loader that always hands back an `Items` and records the keys it saw
#[derive(Default)]
struct FakeLoader {
    seen: Mutex<Vec<AddressKey>>,
}

#[async_trait]
impl ContainerLoader for FakeLoader {
    async fn load_dyn(
        &self,
        key: AddressKey,
        _cancel: Option<CancellationToken>,
    ) -> Result<Arc<dyn SheetContainer>> {
        self.seen.lock().unwrap().push(key);
        Ok(Arc::new(Items))
    }

    fn is_loaded_key(&self, key: &AddressKey) -> Result<bool> {
        Ok(self.seen.lock().unwrap().contains(key))
    }

    fn evict_key(&self, key: &AddressKey) -> Result<bool> {
        let mut seen = self.seen.lock().unwrap();
        let before = seen.len();
        seen.retain(|k| k != key);
        Ok(seen.len() != before)
    }

    fn evict_all(&self) -> Result<usize> {
        Ok(self.seen.lock().unwrap().drain(..).count())
    }

    fn cancel_key(&self, _key: &AddressKey) -> Result<bool> {
        Ok(false)
    }

    fn dispose(&self) {}

    fn is_disposed(&self) -> bool {
        false
    }

    fn cached_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    fn in_flight_count(&self) -> usize {
        0
    }

    fn stats(&self) -> LoaderStats {
        LoaderStats::default()
    }
}

#[tokio::test]
async fn test_typed_load_builds_key() {
    let loader = FakeLoader::default();

    let items = loader.load::<Items>("Config", None).await.expect("load");
    assert!(Arc::strong_count(&items) >= 1);

    let seen = loader.seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].container_type(), ContainerTypeId::of::<Items>());
    assert_eq!(seen[0].address(), "Config");
}

#[tokio::test]
async fn test_empty_address_never_reaches_loader() {
    let loader = FakeLoader::default();

    let err = loader.load::<Items>("", None).await.unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(loader.cached_count(), 0);
}

#[tokio::test]
async fn test_type_mismatch_is_instantiation_error() {
    let loader = FakeLoader::default();

    let err = loader.load::<Quests>("Config", None).await.unwrap_err();

    assert!(matches!(err, Error::Instantiation { .. }));
}

#[tokio::test]
async fn test_works_through_trait_object() {
    let loader: Arc<dyn ContainerLoader> = Arc::new(FakeLoader::default());

    loader.load::<Items>("Config", None).await.expect("load");

    assert!(loader.is_loaded::<Items>("Config").unwrap());
    assert!(!loader.is_loaded::<Quests>("Config").unwrap());
    assert!(loader.evict::<Items>("Config").unwrap());
    assert!(!loader.cancel_load::<Items>("Config").unwrap());
}
