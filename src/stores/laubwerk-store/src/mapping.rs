use crate::models::{IncludedResource, Item};
use crate::{
    ASSET_DOWNLOAD_URL, ASSET_PRODUCT_URL, ASSET_PUBLISHED_AT, ASSET_TAGS, PROVIDER_NAME,
    VEGETATION_CATEGORY,
};
use atrium_core::models::AssetModel;

/// Best-effort thumbnail lookup.
///
/// Follows `relationships.header.data` into the sideloaded `included`
/// resources and returns its `links.source`. Every absence along the way
/// (no relationships, no header, no data, no matching resource) degrades to
/// an empty string rather than failing the item.
pub fn resolve_thumbnail(item: &Item, included: &[IncludedResource]) -> String {
    let Some(header) = item
        .relationships
        .as_ref()
        .and_then(|relationships| relationships.header.as_ref())
        .and_then(|header| header.data.as_ref())
    else {
        return String::new();
    };

    included
        .iter()
        .find(|resource| resource.id == header.id && resource.kind == header.kind)
        .map(|resource| resource.links.source.clone())
        .unwrap_or_default()
}

/// The catalog's botanical name wins over the display name when present.
pub fn resolve_name(item: &Item) -> String {
    item.attributes
        .botanical_name
        .clone()
        .unwrap_or_else(|| item.attributes.name.clone())
}

/// Map one catalog item into the host asset shape.
///
/// Publication timestamp, category/content tags, product and download URLs
/// and price are constants: the vendor API does not expose them per item
/// yet, and the published values below are carried unchanged.
pub fn map_asset(item: &Item, included: &[IncludedResource]) -> AssetModel {
    AssetModel {
        identifier: item.id.clone(),
        name: resolve_name(item),
        published_at: ASSET_PUBLISHED_AT.to_owned(),
        categories: vec![VEGETATION_CATEGORY.to_owned()],
        tags: ASSET_TAGS.iter().map(|tag| (*tag).to_owned()).collect(),
        vendor: PROVIDER_NAME.to_owned(),
        product_url: ASSET_PRODUCT_URL.to_owned(),
        download_url: ASSET_DOWNLOAD_URL.to_owned(),
        thumbnail: resolve_thumbnail(item, included),
        price: 0.0,
    }
}
