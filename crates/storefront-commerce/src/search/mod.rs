//! Search module.
//!
//! Contains the catalog query pipeline, its filters and the result view.

mod filter;
mod query;
mod results;

pub use filter::{CategoryFilter, ALL_CATEGORIES};
pub use query::{query, CatalogQuery, SortKey};
pub use results::{CatalogView, CategoryFacet};
