//! Cart session command.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::cart::{CartLine, CartSession, CartStore};
use storefront_commerce::catalog::Catalog;
use storefront_commerce::{Money, ProductId};

use super::browse::resolve_product;
use super::{CartArgs, CartStep};
use crate::context::Context;

const WIDTHS: [usize; 4] = [26, 4, 10, 10];

/// Cart summary printed in JSON mode.
#[derive(Serialize)]
struct CartSummary {
    lines: Vec<CartLine>,
    line_count: u64,
    subtotal: Money,
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut session = CartSession::started();
    let store = session.store()?;

    let output = ctx.output.clone();
    store.subscribe(move |cart| {
        output.debug(&format!("cart badge: {}", cart.line_count()));
    });

    for step in &args.steps {
        apply_step(&store, &ctx.catalog, step, ctx);
    }

    let summary = CartSummary {
        lines: store.lines(),
        line_count: store.line_count(),
        subtotal: store.subtotal(),
    };
    session.end();

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header("Cart");
    if summary.lines.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    ctx.output.table_row(&["ITEM", "QTY", "PRICE", "TOTAL"], &WIDTHS);
    for line in &summary.lines {
        ctx.output.table_row(
            &[
                &line.product.name,
                &line.quantity.to_string(),
                &line.product.unit_price.to_string(),
                &line.total().to_string(),
            ],
            &WIDTHS,
        );
    }
    ctx.output.kv("items", &summary.line_count.to_string());
    ctx.output.kv("subtotal", &summary.subtotal.to_string());
    ctx.output.success("Cart session complete");

    Ok(())
}

fn apply_step(store: &CartStore, catalog: &Catalog, step: &CartStep, ctx: &Context) {
    ctx.output.debug(&format!("step: {}", step));
    match step {
        CartStep::Add(key) => match resolve_product(catalog, key) {
            Some(product) => store.add_item(product),
            None => ctx.output.warn(&format!("Skipping `{}`: no such product", step)),
        },
        CartStep::Remove(key) => store.remove_item(&target(catalog, key)),
        CartStep::Set(key, quantity) => store.set_quantity(&target(catalog, key), *quantity),
        CartStep::Clear => store.clear(),
    }
}

/// Product id for a remove/set step. Unknown keys pass through and are
/// absorbed by the store as no-ops.
fn target(catalog: &Catalog, key: &str) -> ProductId {
    resolve_product(catalog, key)
        .map(|p| p.id.clone())
        .unwrap_or_else(|| ProductId::new(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;
    use crate::output::Output;
    use storefront_commerce::catalog::seed;

    fn ctx() -> Context {
        Context {
            config: StorefrontConfig::default(),
            catalog: seed::catalog(),
            output: Output::new(false, true),
            cwd: std::env::temp_dir(),
        }
    }

    fn run_steps(steps: &[&str]) -> CartStore {
        let ctx = ctx();
        let store = CartStore::new();
        for step in steps {
            apply_step(&store, &ctx.catalog, &step.parse().unwrap(), &ctx);
        }
        store
    }

    #[test]
    fn test_steps_by_id_and_slug() {
        let store = run_steps(&["add:1", "add:premium-almond-oil", "add:8", "set:1=1"]);
        assert_eq!(store.lines().len(), 2);
        assert_eq!(store.line_count(), 2);
        assert_eq!(store.subtotal(), Money::new(2499 + 1299));
    }

    #[test]
    fn test_unknown_products_are_absorbed() {
        let store = run_steps(&["add:saffron", "remove:saffron", "set:saffron=3"]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_step() {
        let store = run_steps(&["add:2", "add:3", "clear", "add:4"]);
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.subtotal(), Money::new(1599));
    }
}
