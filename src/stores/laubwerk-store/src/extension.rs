use crate::{LaubwerkAssetStore, LaubwerkConfig, SETTING_STORE_ENABLE, STORE_ID};
use atrium_core::registry::AssetServices;
use atrium_core::settings::SettingsStore;
use atrium_core::store::{AssetStore, StoreResult};
use std::sync::Arc;
use tracing::info;

/// Lifecycle shim wiring the Laubwerk store into a host.
///
/// The host's extension manager calls `start` once per load and `stop` once
/// per unload. The shim owns nothing after `stop`; all side effects land on
/// the injected registry and settings capabilities.
#[derive(Default)]
pub struct LaubwerkExtension {
    store: Option<Arc<LaubwerkAssetStore>>,
}

impl LaubwerkExtension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct the store, register it, and flip the enable setting.
    ///
    /// Construction failure propagates to the host loader; nothing is
    /// registered in that case.
    pub fn start(
        &mut self,
        services: &AssetServices,
        settings: &dyn SettingsStore,
        config: LaubwerkConfig,
    ) -> StoreResult<()> {
        let store = Arc::new(LaubwerkAssetStore::new(config)?);
        services.register_store(store.clone());
        settings.set_bool(SETTING_STORE_ENABLE, true);
        info!(store = STORE_ID, "laubwerk extension started");
        self.store = Some(store);
        Ok(())
    }

    /// Unregister the store, clear the enable setting, and drop the store
    /// reference. A no-op when the extension never started.
    pub fn stop(&mut self, services: &AssetServices, settings: &dyn SettingsStore) {
        if let Some(store) = self.store.take() {
            services.unregister_store(store.id());
            settings.set_bool(SETTING_STORE_ENABLE, false);
            info!(store = STORE_ID, "laubwerk extension stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_core::settings::MemorySettings;

    #[test]
    fn start_registers_store_and_enables_setting() {
        let services = AssetServices::new();
        let settings = MemorySettings::new();
        let mut extension = LaubwerkExtension::new();

        extension
            .start(&services, &settings, LaubwerkConfig::default())
            .expect("start should succeed");

        assert!(services.store(STORE_ID).is_some());
        assert_eq!(settings.get_bool(SETTING_STORE_ENABLE), Some(true));
    }

    #[test]
    fn stop_unregisters_store_and_disables_setting() {
        let services = AssetServices::new();
        let settings = MemorySettings::new();
        let mut extension = LaubwerkExtension::new();

        extension
            .start(&services, &settings, LaubwerkConfig::default())
            .expect("start should succeed");
        extension.stop(&services, &settings);

        assert!(services.store(STORE_ID).is_none());
        assert_eq!(settings.get_bool(SETTING_STORE_ENABLE), Some(false));
    }

    #[test]
    fn stop_without_start_is_a_no_op() {
        let services = AssetServices::new();
        let settings = MemorySettings::new();
        let mut extension = LaubwerkExtension::new();

        extension.stop(&services, &settings);

        assert_eq!(settings.get_bool(SETTING_STORE_ENABLE), None);
    }

    #[test]
    fn failed_start_registers_nothing() {
        let services = AssetServices::new();
        let settings = MemorySettings::new();
        let mut extension = LaubwerkExtension::new();

        let config = LaubwerkConfig {
            base_url: "not a url".to_owned(),
            ..LaubwerkConfig::default()
        };
        assert!(extension.start(&services, &settings, config).is_err());
        assert!(services.store(STORE_ID).is_none());
        assert_eq!(settings.get_bool(SETTING_STORE_ENABLE), None);
    }
}
