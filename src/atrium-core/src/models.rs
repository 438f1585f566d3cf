use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The generic query the host passes to every registered asset store.
///
/// Stores MUST treat unset paging fields as "use your backend default" and
/// omit them from any outbound request rather than sending zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Ordered keyword terms as typed by the user.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Hierarchical category paths, e.g. `/Vegetation/Trees`.
    #[serde(default)]
    pub categories: Vec<String>,
    /// One-based page number.
    #[serde(default)]
    pub page: Option<u32>,
    /// Maximum items per page.
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl SearchCriteria {
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// One normalized catalog entry returned from a store search.
///
/// Constructed fresh per result item; the host keeps no identity for these
/// beyond the call that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetModel {
    /// Store-scoped identifier of the catalog item.
    pub identifier: String,
    pub name: String,
    /// RFC 3339 publication timestamp.
    pub published_at: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    /// Identifier of the store that produced this entry.
    pub vendor: String,
    pub product_url: String,
    pub download_url: String,
    /// Empty string when the store could not resolve a thumbnail.
    pub thumbnail: String,
    pub price: f64,
}

/// Static descriptor a store exposes to the host's store list UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderModel {
    pub name: String,
    /// Icon image path, resolved against the host data directory.
    pub icon: PathBuf,
    /// Settings key controlling whether the store shows up in the browser.
    pub enable_setting: String,
}

/// One page of search results plus a continuation hint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub assets: Vec<AssetModel>,
    /// Whether the backend reports further pages beyond this one.
    pub more: bool,
}

impl SearchResults {
    pub fn empty() -> Self {
        Self::default()
    }
}
