use crate::models::{ProviderModel, SearchCriteria, SearchResults};
use async_trait::async_trait;
use thiserror::Error;

/// Common categories of store failures surfaced to the host UI.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("network error: {message}")]
    Network { message: String },
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },
    #[error("{message}")]
    Other { message: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Capability contract every asset store implements.
///
/// The host wraps `search` in its own deadline; stores set no local timeout.
/// Stores hold no cross-call state, so overlapping searches from the browser
/// UI are independent.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Stable store identifier (e.g. "laubwerk").
    fn id(&self) -> &str;

    /// Run one search against the backing catalog.
    ///
    /// An out-of-domain query (a category filter the store does not serve)
    /// is a successful empty result, not an error.
    async fn search(&self, criteria: &SearchCriteria) -> StoreResult<SearchResults>;

    /// Static descriptor shown in the host's store list.
    fn provider(&self) -> ProviderModel;
}
