//! Product type.

use crate::ids::{CategoryId, LooseProductId, ProductId};
use crate::money::{self, Money};
use serde::{Deserialize, Deserializer, Serialize};

/// A product in the catalog.
///
/// Products are immutable once loaded. Deserialization is tolerant of
/// missing display fields: they fall back to empty strings, a zero price
/// and `false` flags so that a sparse record still orders predictably.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    #[serde(deserialize_with = "loose_product_id")]
    pub id: ProductId,
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// URL-friendly slug (unique).
    #[serde(default)]
    pub slug: String,
    /// Short description for listings.
    #[serde(default)]
    pub description: String,
    /// Current selling price.
    #[serde(default, with = "money::decimal")]
    pub price: Money,
    /// Price before discount; presence implies the product is discounted.
    #[serde(
        default,
        with = "money::decimal::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Money>,
    /// Category this product belongs to.
    #[serde(default)]
    pub category: CategoryId,
    /// Shown in the featured collection and sorted first under `featured`.
    #[serde(default)]
    pub featured: bool,
    /// Carries a bestseller badge.
    #[serde(default)]
    pub bestseller: bool,
    /// Stock flag, display only.
    #[serde(default)]
    pub in_stock: bool,
    /// Primary image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn loose_product_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ProductId, D::Error> {
    LooseProductId::deserialize(deserializer).map(|id| id.0)
}

impl Product {
    /// Create a new in-stock product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<CategoryId>,
        price: Money,
    ) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            slug: slugify(&name),
            name,
            description: String::new(),
            price,
            original_price: None,
            category: category.into(),
            featured: false,
            bestseller: false,
            in_stock: true,
            image: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the price before discount.
    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    /// Set the slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Set the primary image path.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Mark as featured.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Mark as bestseller.
    pub fn bestseller(mut self) -> Self {
        self.bestseller = true;
        self
    }

    /// Check if this product is on sale (original price above price).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Discount off the original price, rounded to a whole percent.
    pub fn discount_percentage(&self) -> Option<u32> {
        let original = self.original_price?;
        if original.amount_cents <= self.price.amount_cents || original.amount_cents <= 0 {
            return None;
        }
        let savings = (original.amount_cents - self.price.amount_cents) as f64;
        Some((savings / original.amount_cents as f64 * 100.0).round() as u32)
    }

    /// Check if the name or description contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_term(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
