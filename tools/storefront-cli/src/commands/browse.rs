//! Catalog browsing commands.

use anyhow::{bail, Result};
use storefront_commerce::catalog::{Catalog, Product};
use storefront_commerce::search::{CatalogQuery, CategoryFacet, CategoryFilter, SortKey};
use storefront_commerce::ProductId;

use super::{BrowseArgs, ProductArgs};
use crate::context::Context;
use crate::output::{product_badges, stock_badge};

const WIDTHS: [usize; 4] = [4, 26, 22, 28];

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let query = build_query(&args, ctx);
    ctx.output.debug(&format!(
        "query: category={} search={:?} sort={}",
        query.category, query.search_term, query.sort
    ));

    let view = ctx.catalog.search(&query);

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", view.query.sort.display_name()));
    ctx.output.info(&view.summary());

    if view.is_empty() {
        ctx.output.warn("No products found. Try adjusting your search or filter criteria.");
        ctx.output.info("Run `storefront browse` without filters to see everything.");
        return Ok(());
    }

    ctx.output.table_row(&["ID", "NAME", "PRICE", "BADGES"], &WIDTHS);
    for product in &view.products {
        let price = price_label(product);
        let badges = product_badges(product).join(" ");
        ctx.output
            .table_row(&[product.id.as_str(), &product.name, &price, &badges], &WIDTHS);
    }

    Ok(())
}

/// Run the categories command.
pub fn categories(ctx: &Context) -> Result<()> {
    let view = ctx.catalog.search(&CatalogQuery::new());

    if ctx.output.is_json() {
        ctx.output.json(&view.facets);
        return Ok(());
    }

    ctx.output.header("Categories");
    for facet in &view.facets {
        ctx.output.list_item(&facet_label(facet));
    }
    Ok(())
}

/// Run the product command.
pub fn product(args: ProductArgs, ctx: &Context) -> Result<()> {
    let Some(product) = resolve_product(&ctx.catalog, &args.product) else {
        bail!("No product with id or slug `{}`", args.product);
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("slug", &product.slug);
    let category = ctx
        .catalog
        .category(&product.category)
        .map(|c| c.name.as_str())
        .unwrap_or_else(|| product.category.as_str());
    ctx.output.kv("category", category);
    ctx.output.kv("price", &price_label(product));
    ctx.output.kv("stock", &stock_badge(product.in_stock));
    let badges = product_badges(product);
    if !badges.is_empty() {
        ctx.output.kv("badges", &badges.join(", "));
    }
    if !product.description.is_empty() {
        ctx.output.kv("description", &product.description);
    }
    Ok(())
}

/// Look a product up by id, falling back to slug.
pub fn resolve_product<'a>(catalog: &'a Catalog, key: &str) -> Option<&'a Product> {
    catalog
        .product(&ProductId::new(key))
        .or_else(|| catalog.product_by_slug(key))
}

/// Merge command-line selections over the configured defaults.
fn build_query(args: &BrowseArgs, ctx: &Context) -> CatalogQuery {
    let defaults = &ctx.config.browse;
    CatalogQuery {
        category: args
            .category
            .as_deref()
            .map(CategoryFilter::parse)
            .unwrap_or_else(|| defaults.category.clone()),
        search_term: args.search.clone().unwrap_or_default(),
        sort: args.sort.as_deref().map(SortKey::parse).unwrap_or(defaults.sort),
    }
}

fn price_label(product: &Product) -> String {
    match product.original_price {
        Some(original) if product.is_on_sale() => format!("{} (was {})", product.price, original),
        _ => product.price.to_string(),
    }
}

fn facet_label(facet: &CategoryFacet) -> String {
    format!("{} ({}) [{}]", facet.label, facet.count, facet.filter)
}
