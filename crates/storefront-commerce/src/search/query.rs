//! Catalog query pipeline: category filter, text filter, stable sort.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product};
use crate::search::filter::{CategoryFilter, TextFilter};

/// Sort options for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Name A-Z.
    #[default]
    Name,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Featured products first, then by name.
    Featured,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Featured,
    ];

    /// Parse a wire value. Unknown values fall back to [`SortKey::Name`].
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "featured" => SortKey::Featured,
            _ => SortKey::Name,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Featured => "featured",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Name => "Name (A-Z)",
            SortKey::PriceLow => "Price (Low to High)",
            SortKey::PriceHigh => "Price (High to Low)",
            SortKey::Featured => "Featured First",
        }
    }

    /// Compare two products under this key.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::Featured => b
                .featured
                .cmp(&a.featured)
                .then_with(|| compare_names(&a.name, &b.name)),
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collation-style name ordering: case-folded first, then lowercase
/// before uppercase for names that differ only in case.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// A catalog query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    /// Category selection.
    #[serde(default)]
    pub category: CategoryFilter,
    /// Free-text term; blank means no text filtering.
    #[serde(default)]
    pub search_term: String,
    /// Sort order.
    #[serde(default)]
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Create the default query: all categories, no term, sorted by name.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Clear every selection back to the defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether any filter narrows the catalog.
    pub fn is_filtered(&self) -> bool {
        !self.category.is_all() || !self.search_term.trim().is_empty()
    }
}

/// Run the query pipeline over `products`.
///
/// Stages run in a fixed order: category filter, then text filter, then a
/// stable sort. The input is never reordered or modified; the result
/// borrows from it. Unknown categories simply match nothing.
pub fn query<'a>(
    products: &'a [Product],
    categories: &[Category],
    filter: &CatalogQuery,
) -> Vec<&'a Product> {
    if let CategoryFilter::Category(id) = &filter.category {
        if !categories.iter().any(|c| &c.id == id) {
            tracing::trace!(category = %id, "query on unknown category");
        }
    }

    let text = TextFilter::new(&filter.search_term);

    let mut matched: Vec<&Product> = products
        .iter()
        .filter(|p| filter.category.matches(p))
        .filter(|p| text.matches(p))
        .collect();

    // sort_by is stable
    matched.sort_by(|a, b| filter.sort.compare(a, b));

    tracing::trace!(
        category = %filter.category,
        text = text.is_active(),
        sort = %filter.sort,
        matched = matched.len(),
        "catalog query"
    );

    matched
}
