//! Storefront domain types and logic.
//!
//! - **Catalog**: products, categories and the validated static catalog
//! - **Search**: the category → text → sort query pipeline and its result view
//! - **Cart**: line items, the action reducer, the shared store and its session
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let catalog = seed::catalog();
//!
//! let query = CatalogQuery::new().with_category("oils").with_search("olive");
//! let view = catalog.search(&query);
//! assert_eq!(view.products[0].name, "Extra Virgin Olive Oil");
//!
//! let session = CartSession::started();
//! let cart = session.store()?;
//! cart.add_item(view.products[0]);
//! assert_eq!(cart.subtotal().display(), "$32.99");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::{CategoryId, ProductId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{CategoryId, ProductId};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{seed, Catalog, Category, Product};

    // Search
    pub use crate::search::{query, CatalogQuery, CatalogView, CategoryFacet, CategoryFilter, SortKey};

    // Cart
    pub use crate::cart::{
        Cart, CartAction, CartLine, CartSession, CartStore, ProductSnapshot, SubscriptionId,
    };
}
