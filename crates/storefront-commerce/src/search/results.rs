//! Query results and category facets.

use serde::Serialize;

use crate::catalog::{Catalog, Product};
use crate::search::{CatalogQuery, CategoryFilter};

/// A category option with the number of catalog products it matches.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryFacet {
    /// Selection this facet applies.
    pub filter: CategoryFilter,
    /// Display label.
    pub label: String,
    /// Products in the whole catalog matching this facet.
    pub count: usize,
    /// Whether this facet is the active selection.
    pub selected: bool,
}

/// The ordered result of a catalog query, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    /// Query that produced this view.
    pub query: CatalogQuery,
    /// Matching products, in display order.
    pub products: Vec<&'a Product>,
    /// Size of the unfiltered catalog.
    pub total: usize,
    /// `all` followed by one facet per category.
    pub facets: Vec<CategoryFacet>,
}

impl<'a> CatalogView<'a> {
    pub(crate) fn new(catalog: &'a Catalog, query: CatalogQuery, products: Vec<&'a Product>) -> Self {
        let facets = category_facets(catalog, &query.category);
        Self {
            query,
            products,
            total: catalog.len(),
            facets,
        }
    }

    /// Number of matching products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when nothing matched; the front end offers a reset instead of an error.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Summary line, e.g. `Showing 1 of 8 products for "olive"`.
    pub fn summary(&self) -> String {
        let mut s = format!("Showing {} of {} products", self.len(), self.total);
        let term = self.query.search_term.trim();
        if !term.is_empty() {
            s.push_str(&format!(" for \"{}\"", term));
        }
        s
    }
}

fn category_facets(catalog: &Catalog, active: &CategoryFilter) -> Vec<CategoryFacet> {
    let mut facets = Vec::with_capacity(catalog.categories().len() + 1);
    facets.push(CategoryFacet {
        filter: CategoryFilter::All,
        label: "All Products".to_string(),
        count: catalog.len(),
        selected: active.is_all(),
    });

    for category in catalog.categories() {
        let filter = CategoryFilter::Category(category.id.clone());
        facets.push(CategoryFacet {
            count: catalog.products_in(&category.id).count(),
            selected: &filter == active,
            label: category.name.clone(),
            filter,
        });
    }

    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    #[test]
    fn test_facet_counts() {
        let catalog = seed::catalog();
        let view = catalog.search(&CatalogQuery::new().with_category("dairy"));

        let counts: Vec<(String, usize, bool)> = view
            .facets
            .iter()
            .map(|f| (f.filter.to_string(), f.count, f.selected))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("all".to_string(), 8, false),
                ("oils".to_string(), 6, false),
                ("dairy".to_string(), 1, true),
                ("natural-foods".to_string(), 1, false),
            ]
        );
    }

    #[test]
    fn test_summary() {
        let catalog = seed::catalog();
        let view = catalog.search(&CatalogQuery::new().with_search(" olive "));
        assert_eq!(view.summary(), "Showing 1 of 8 products for \"olive\"");

        let view = catalog.search(&CatalogQuery::new());
        assert_eq!(view.summary(), "Showing 8 of 8 products");
    }

    #[test]
    fn test_empty_view() {
        let catalog = seed::catalog();
        let view = catalog.search(&CatalogQuery::new().with_search("saffron"));
        assert!(view.is_empty());
        assert_eq!(view.total, 8);
    }
}
