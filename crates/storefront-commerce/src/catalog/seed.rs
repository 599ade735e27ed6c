//! The brand's built-in catalog: three categories and eight products.

use super::{Catalog, Category, Product};
use crate::money::Money;

/// Categories in display order.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new("oils", "Premium Oils")
            .with_description("Cold-pressed, pure oils for cooking and wellness"),
        Category::new("dairy", "Artisan Dairy")
            .with_description("Premium cheese and dairy products"),
        Category::new("natural-foods", "Natural Foods")
            .with_description("Pure, unprocessed natural foods and sweeteners"),
    ]
}

/// Products in catalog order.
pub fn products() -> Vec<Product> {
    vec![
        item(1, "Premium Almond Oil", "premium-almond-oil", "oils", 2499, 2999)
            .with_image("/images/almond-oil.png")
            .with_description(
                "Cold-pressed sweet almond oil, perfect for cooking and skincare. \
                 Rich in vitamin E and healthy monounsaturated fats.",
            )
            .featured()
            .bestseller(),
        item(2, "Extra Virgin Olive Oil", "extra-virgin-olive-oil", "oils", 3299, 3899)
            .with_image("/images/olive-oil.png")
            .with_description(
                "Premium extra virgin olive oil from hand-picked olives. \
                 Perfect for cooking, drizzling, and Mediterranean cuisine.",
            )
            .featured()
            .bestseller(),
        item(3, "Pure Mustard Oil", "pure-mustard-oil", "oils", 1899, 2299)
            .with_image("/images/mustard-oil.png")
            .with_description(
                "Traditional cold-pressed mustard oil with a distinctive pungent flavor. \
                 Essential for Indian and Bengali cuisine.",
            )
            .bestseller(),
        item(4, "Aged Cheddar Cheese", "aged-cheddar-cheese", "dairy", 1599, 1999)
            .with_image("/images/cheddar-cheese.png")
            .with_description(
                "Premium aged cheddar cheese with a sharp, complex flavor. \
                 Made from grass-fed cow's milk using traditional methods.",
            )
            .bestseller(),
        item(5, "Organic Coconut Oil", "organic-coconut-oil", "oils", 2199, 2699)
            .with_image("/images/coconut-oil.png")
            .with_description(
                "Virgin coconut oil extracted from fresh coconuts. \
                 Perfect for cooking, baking, and natural skincare.",
            )
            .featured(),
        item(6, "Avocado Oil", "premium-avocado-oil", "oils", 2899, 3499)
            .with_image("/images/avocado-oil.png")
            .with_description(
                "Cold-pressed avocado oil with a high smoke point. \
                 Perfect for high-heat cooking and heart-healthy nutrition.",
            )
            .featured(),
        item(7, "Sesame Oil", "pure-sesame-oil", "oils", 1699, 2099)
            .with_image("/images/sesame-oil.png")
            .with_description(
                "Aromatic sesame oil with a rich, nutty flavor. \
                 Essential for Asian cuisine and finishing dishes.",
            ),
        item(8, "Organic Honey", "organic-wildflower-honey", "natural-foods", 1299, 1599)
            .with_image("/images/honey.png")
            .with_description(
                "Raw, unfiltered wildflower honey from local beekeepers. \
                 Pure sweetness with natural enzymes intact.",
            ),
    ]
}

/// The built-in catalog.
pub fn catalog() -> Catalog {
    Catalog {
        products: products(),
        categories: categories(),
    }
}

fn item(id: u32, name: &str, slug: &str, category: &str, cents: i64, original: i64) -> Product {
    Product::new(id.to_string(), name, category, Money::new(cents))
        .with_slug(slug)
        .with_original_price(Money::new(original))
}
