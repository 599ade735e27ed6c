//! Catalog filters.

use crate::catalog::Product;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire value of the wildcard category.
pub const ALL_CATEGORIES: &str = "all";

/// Category selection: one category, or the synthetic wildcard `all`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every product passes.
    #[default]
    All,
    /// Only products in this category pass.
    Category(CategoryId),
}

impl CategoryFilter {
    /// Parse a selection where `"all"` is the wildcard.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            ALL_CATEGORIES => CategoryFilter::All,
            id => CategoryFilter::Category(CategoryId::new(id)),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(id) => id.as_str(),
        }
    }

    /// Check if a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => &product.category == id,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<CategoryId> for CategoryFilter {
    fn from(id: CategoryId) -> Self {
        CategoryFilter::Category(id)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive substring match over name and description.
///
/// Built once per query so the term is trimmed and lowercased a single time.
#[derive(Debug, Clone)]
pub(crate) struct TextFilter {
    needle: Option<String>,
}

impl TextFilter {
    pub(crate) fn new(term: &str) -> Self {
        let trimmed = term.trim();
        Self {
            needle: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    pub(crate) fn matches(&self, product: &Product) -> bool {
        match &self.needle {
            Some(needle) => product.matches_term(needle),
            None => true,
        }
    }
}
