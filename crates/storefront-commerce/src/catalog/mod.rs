//! Product catalog module.
//!
//! Contains the product and category types and the validated, read-only
//! [`Catalog`] the storefront is rendered from.

mod category;
mod product;
pub mod seed;

pub use category::Category;
pub use product::Product;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::search::{self, CatalogQuery, CatalogView};

/// The static product catalog.
///
/// Loaded once and never mutated afterwards. Construction checks the
/// data-model invariants so lookups can rely on unique ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    categories: Vec<Category>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = CommerceError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Catalog::new(raw.products, raw.categories)
    }
}

impl Catalog {
    /// Build a catalog, validating ids, category references and prices.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CommerceError> {
        validate(&products, &categories).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected catalog");
        })?;
        tracing::debug!(
            products = products.len(),
            categories = categories.len(),
            "catalog loaded"
        );
        Ok(Self {
            products,
            categories,
        })
    }

    /// Parse a catalog from JSON.
    ///
    /// Malformed JSON is a [`CommerceError::SerializationError`]; well-formed
    /// data that breaks a catalog invariant is [`CommerceError::InvalidCatalog`].
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Catalog::new(raw.products, raw.categories)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Products in one category, in catalog order.
    pub fn products_in<'a>(&'a self, category: &'a CategoryId) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| &p.category == category)
    }

    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }

    pub fn bestsellers(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.bestseller)
    }

    /// Run a query over this catalog and describe the result for display.
    pub fn search(&self, query: &CatalogQuery) -> CatalogView<'_> {
        let products = search::query(&self.products, &self.categories, query);
        CatalogView::new(self, query.clone(), products)
    }
}

fn validate(products: &[Product], categories: &[Category]) -> Result<(), CommerceError> {
    let mut category_ids = HashSet::new();
    for category in categories {
        if !category_ids.insert(&category.id) {
            return Err(CommerceError::InvalidCatalog(format!(
                "duplicate category id: {}",
                category.id
            )));
        }
    }

    let mut product_ids = HashSet::new();
    let mut slugs = HashSet::new();
    for product in products {
        if !product_ids.insert(&product.id) {
            return Err(CommerceError::InvalidCatalog(format!(
                "duplicate product id: {}",
                product.id
            )));
        }
        if !product.slug.is_empty() && !slugs.insert(product.slug.as_str()) {
            return Err(CommerceError::InvalidCatalog(format!(
                "duplicate product slug: {}",
                product.slug
            )));
        }
        if !category_ids.contains(&product.category) {
            return Err(CommerceError::InvalidCatalog(format!(
                "product {} references unknown category: {}",
                product.id, product.category
            )));
        }
        if product.price.is_negative() {
            return Err(CommerceError::InvalidCatalog(format!(
                "product {} has a negative price",
                product.id
            )));
        }
        if let Some(original) = product.original_price {
            if original < product.price {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} original price {} is below its price {}",
                    product.id, original, product.price
                )));
            }
        }
    }

    Ok(())
}
