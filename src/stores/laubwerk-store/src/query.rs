use crate::VEGETATION_CATEGORY;
use atrium_core::models::SearchCriteria;

/// Split hierarchical category paths into bare tokens.
///
/// A leading separator is stripped, so `/Vegetation/Trees` yields
/// `["Vegetation", "Trees"]`.
pub fn category_tokens(categories: &[String]) -> Vec<String> {
    let mut tokens = Vec::new();
    for category in categories {
        let path = category.strip_prefix('/').unwrap_or(category);
        tokens.extend(path.split('/').map(str::to_owned));
    }
    tokens
}

/// Whether the criteria fall inside the category this store serves.
///
/// An empty filter means "everywhere" and always matches. Sub-category
/// tokens below Vegetation are accepted but not forwarded to the vendor.
/// TODO: map the Tree/Plants/Grass/Bush sub-categories onto vendor
/// categories once the search API exposes them.
pub fn in_vegetation_category(criteria: &SearchCriteria) -> bool {
    if criteria.categories.is_empty() {
        return true;
    }
    category_tokens(&criteria.categories)
        .iter()
        .any(|token| token == VEGETATION_CATEGORY)
}

/// Assemble the outbound query pairs. Unset criteria are omitted entirely,
/// never sent as empty or zero values.
pub fn build_query(criteria: &SearchCriteria) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if !criteria.keywords.is_empty() {
        params.push(("query".to_owned(), criteria.keywords.join("+")));
    }
    if let Some(page) = criteria.page {
        params.push(("page".to_owned(), page.to_string()));
    }
    if let Some(size) = criteria.page_size {
        params.push(("per_page".to_owned(), size.to_string()));
    }
    params
}
