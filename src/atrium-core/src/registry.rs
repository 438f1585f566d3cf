use crate::store::AssetStore;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Host-owned registry of asset stores.
///
/// Stores register once at extension startup and unregister once at
/// shutdown; everything in between is read-only lookup from the browser UI.
/// Registering a store whose id is already present replaces the previous
/// registration.
#[derive(Default)]
pub struct AssetServices {
    stores: RwLock<Vec<Arc<dyn AssetStore>>>,
}

impl AssetServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_store(&self, store: Arc<dyn AssetStore>) {
        let mut stores = self.stores.write().unwrap();
        stores.retain(|existing| existing.id() != store.id());
        debug!(store = store.id(), "asset store registered");
        stores.push(store);
    }

    /// Remove the store registered under `id`. Returns whether anything was
    /// removed.
    pub fn unregister_store(&self, id: &str) -> bool {
        let mut stores = self.stores.write().unwrap();
        let before = stores.len();
        stores.retain(|existing| existing.id() != id);
        let removed = stores.len() < before;
        if removed {
            debug!(store = id, "asset store unregistered");
        }
        removed
    }

    pub fn store(&self, id: &str) -> Option<Arc<dyn AssetStore>> {
        self.stores
            .read()
            .unwrap()
            .iter()
            .find(|store| store.id() == id)
            .cloned()
    }

    /// Ids of all registered stores, in registration order.
    pub fn store_ids(&self) -> Vec<String> {
        self.stores
            .read()
            .unwrap()
            .iter()
            .map(|store| store.id().to_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProviderModel, SearchCriteria, SearchResults};
    use crate::store::StoreResult;
    use async_trait::async_trait;
    use std::path::PathBuf;

    struct StubStore {
        id: String,
    }

    impl StubStore {
        fn new(id: &str) -> Arc<Self> {
            Arc::new(Self { id: id.to_owned() })
        }
    }

    #[async_trait]
    impl AssetStore for StubStore {
        fn id(&self) -> &str {
            &self.id
        }

        async fn search(&self, _criteria: &SearchCriteria) -> StoreResult<SearchResults> {
            Ok(SearchResults::empty())
        }

        fn provider(&self) -> ProviderModel {
            ProviderModel {
                name: self.id.clone(),
                icon: PathBuf::from("stub.png"),
                enable_setting: format!("stores.{}.enabled", self.id),
            }
        }
    }

    #[test]
    fn register_then_lookup() {
        let services = AssetServices::new();
        services.register_store(StubStore::new("stub"));
        assert!(services.store("stub").is_some());
        assert_eq!(services.store_ids(), vec!["stub"]);
    }

    #[test]
    fn reregistration_replaces_previous_store() {
        let services = AssetServices::new();
        services.register_store(StubStore::new("stub"));
        services.register_store(StubStore::new("stub"));
        assert_eq!(services.store_ids(), vec!["stub"]);
    }

    #[test]
    fn unregister_removes_store() {
        let services = AssetServices::new();
        services.register_store(StubStore::new("stub"));
        assert!(services.unregister_store("stub"));
        assert!(services.store("stub").is_none());
        assert!(!services.unregister_store("stub"));
    }

    #[test]
    fn unknown_store_is_absent() {
        let services = AssetServices::new();
        assert!(services.store("missing").is_none());
        assert!(services.store_ids().is_empty());
    }
}
