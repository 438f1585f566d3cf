//! Laubwerk asset store for the Atrium asset browser.
//!
//! Translates the host's generic search criteria into one GET against the
//! Laubwerk catalog API and maps the JSON:API response into host asset
//! models. The store serves exactly one category (`Vegetation`); anything
//! else short-circuits to an empty result without a network call.
//!
//! The store holds no cross-call state and sets no local timeout — the host
//! wraps every `search` in its own deadline.

mod extension;
mod mapping;
pub mod models;
mod query;

pub use extension::LaubwerkExtension;

use async_trait::async_trait;
use atrium_core::models::{ProviderModel, SearchCriteria, SearchResults};
use atrium_core::store::{AssetStore, StoreError, StoreResult};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

/// Identifier this store registers under.
pub const STORE_ID: &str = "laubwerk";
/// Vendor name shown in the host UI and stamped on every asset.
pub const PROVIDER_NAME: &str = "Laubwerk";
/// Production search endpoint.
pub const STORE_URL: &str = "https://api.laubwerk.com/1/search";
/// Settings key the extension flips on registration.
pub const SETTING_STORE_ENABLE: &str = "stores.laubwerk.enabled";
/// The one category path token this store serves.
pub const VEGETATION_CATEGORY: &str = "Vegetation";

/// Fixed guest credential; the catalog's search surface sits behind it.
const GUEST_AUTHORIZATION: &str = "Basic Z3Vlc3Q6bGF1Yndlcms=";
/// Icon file resolved against the host data directory.
const ICON_FILE: &str = "laubwerk-64x64.png";

// Catalog metadata the vendor API does not expose per item yet; the
// published values are carried unchanged for every result.
const ASSET_PUBLISHED_AT: &str = "2015-12-07T21:19:08+00:00";
const ASSET_TAGS: &[&str] = &["broadleaf", "temperate"];
const ASSET_PRODUCT_URL: &str =
    "https://stage.api.laubwerk.com/1/images/1086/file?size=thumbnail";
const ASSET_DOWNLOAD_URL: &str =
    "https://stage.api.laubwerk.com/1/images/1086/file?size=thumbnail";

#[derive(Debug, Clone)]
pub struct LaubwerkConfig {
    /// Search endpoint; overridable for staging setups and tests.
    pub base_url: String,
    /// Directory holding bundled store resources such as the icon.
    pub data_dir: PathBuf,
    /// Host application identity, advertisory only.
    pub host_app: String,
    pub host_version: String,
}

impl Default for LaubwerkConfig {
    fn default() -> Self {
        Self {
            base_url: STORE_URL.to_owned(),
            data_dir: PathBuf::from("data"),
            host_app: "atrium".to_owned(),
            host_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

pub struct LaubwerkAssetStore {
    client: Client,
    base_url: Url,
    data_dir: PathBuf,
}

impl LaubwerkAssetStore {
    pub fn new(config: LaubwerkConfig) -> StoreResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| StoreError::Other {
            message: format!("invalid base_url: {e}"),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(GUEST_AUTHORIZATION));
        // No client timeout: the host imposes its own deadline on search.
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::Other {
                message: e.to_string(),
            })?;

        debug!(
            host_app = %config.host_app,
            host_version = %config.host_version,
            endpoint = %base_url,
            "laubwerk store ready"
        );

        Ok(Self {
            client,
            base_url,
            data_dir: config.data_dir,
        })
    }
}

#[async_trait]
impl AssetStore for LaubwerkAssetStore {
    fn id(&self) -> &str {
        STORE_ID
    }

    async fn search(&self, criteria: &SearchCriteria) -> StoreResult<SearchResults> {
        if !query::in_vegetation_category(criteria) {
            debug!("category filter outside Vegetation, returning empty result");
            return Ok(SearchResults::empty());
        }

        let params = query::build_query(criteria);
        debug!(params = params.len(), "querying laubwerk catalog");

        let response = self
            .client
            .get(self.base_url.clone())
            .query(&params)
            .send()
            .await
            .map_err(|e| StoreError::Network {
                message: e.to_string(),
            })?;

        let body: models::SearchResponse =
            response.json().await.map_err(|e| StoreError::InvalidResponse {
                message: e.to_string(),
            })?;

        debug!(
            items = body.data.len(),
            more = body.links.next.is_some(),
            "laubwerk search response received"
        );

        let assets = body
            .data
            .iter()
            .map(|item| mapping::map_asset(item, &body.included))
            .collect();
        Ok(SearchResults {
            assets,
            more: body.links.next.is_some(),
        })
    }

    fn provider(&self) -> ProviderModel {
        ProviderModel {
            name: PROVIDER_NAME.to_owned(),
            icon: self.data_dir.join(ICON_FILE),
            enable_setting: SETTING_STORE_ENABLE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = LaubwerkConfig {
            base_url: "not a url".to_owned(),
            ..LaubwerkConfig::default()
        };
        assert!(matches!(
            LaubwerkAssetStore::new(config),
            Err(StoreError::Other { .. })
        ));
    }

    #[test]
    fn provider_descriptor_is_stable() {
        let store =
            LaubwerkAssetStore::new(LaubwerkConfig::default()).expect("store should build");
        let first = store.provider();
        let second = store.provider();
        assert_eq!(first, second);
        assert_eq!(first.name, "Laubwerk");
        assert_eq!(first.enable_setting, SETTING_STORE_ENABLE);
        assert!(first.icon.ends_with("laubwerk-64x64.png"));
    }

    #[test]
    fn store_id_matches_registry_key() {
        let store =
            LaubwerkAssetStore::new(LaubwerkConfig::default()).expect("store should build");
        assert_eq!(store.id(), STORE_ID);
    }
}
