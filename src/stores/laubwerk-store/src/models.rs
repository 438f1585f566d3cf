use serde::Deserialize;

/// Search response from the Laubwerk catalog API (JSON:API shaped).
///
/// Fields the adapter tolerates being absent carry defaults; everything else
/// is required, and a response missing it fails the whole call.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<Item>,
    /// Sideloaded resources referenced from item relationships.
    #[serde(default)]
    pub included: Vec<IncludedResource>,
    pub links: Links,
}

#[derive(Debug, Deserialize)]
pub struct Item {
    pub id: String,
    pub attributes: Attributes,
    #[serde(default)]
    pub relationships: Option<Relationships>,
}

#[derive(Debug, Deserialize)]
pub struct Attributes {
    pub name: String,
    /// Scientific name; preferred over `name` when present.
    #[serde(rename = "botanicalName", default)]
    pub botanical_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Relationships {
    /// Reference to the item's header image in `included`.
    #[serde(default)]
    pub header: Option<Relationship>,
}

#[derive(Debug, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<ResourceRef>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ResourceRef {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct IncludedResource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub links: ResourceLinks,
}

#[derive(Debug, Deserialize)]
pub struct ResourceLinks {
    pub source: String,
}

#[derive(Debug, Deserialize)]
pub struct Links {
    /// URL of the next page; `null` on the last page.
    pub next: Option<String>,
}
