//! End-to-end scenarios over the built-in catalog.

use storefront_commerce::prelude::*;

fn names(view: &CatalogView<'_>) -> Vec<String> {
    view.products.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn oils_filter_then_search_narrows_to_olive_oil() {
    let catalog = seed::catalog();

    let oils = catalog.search(&CatalogQuery::new().with_category("oils"));
    assert_eq!(oils.len(), 6);
    assert!(oils.products.iter().all(|p| p.category.as_str() == "oils"));

    let olive = catalog.search(&CatalogQuery::new().with_category("oils").with_search("olive"));
    assert_eq!(names(&olive), vec!["Extra Virgin Olive Oil"]);
}

#[test]
fn price_low_puts_honey_first_and_olive_oil_last() {
    let catalog = seed::catalog();
    let view = catalog.search(&CatalogQuery::new().with_sort(SortKey::PriceLow));

    assert_eq!(view.len(), 8);
    let first = view.products.first().unwrap();
    let last = view.products.last().unwrap();
    assert_eq!((first.name.as_str(), first.price.display()), ("Organic Honey", "$12.99".to_string()));
    assert_eq!(
        (last.name.as_str(), last.price.display()),
        ("Extra Virgin Olive Oil", "$32.99".to_string())
    );
}

#[test]
fn no_results_then_reset_restores_full_listing() {
    let catalog = seed::catalog();
    let mut query = CatalogQuery::new().with_category("dairy").with_search("honey");
    assert!(catalog.search(&query).is_empty());

    query.reset();
    assert_eq!(catalog.search(&query).len(), 8);
}

#[test]
fn add_add_add_set_scenario() {
    let catalog = seed::catalog();
    let a = catalog.product(&ProductId::new("1")).unwrap();
    let b = catalog.product(&ProductId::new("8")).unwrap();

    let session = CartSession::started();
    let cart = session.store().unwrap();
    cart.add_item(a);
    cart.add_item(a);
    cart.add_item(b);
    cart.set_quantity(&a.id, 1);

    assert_eq!(cart.lines().len(), 2);
    assert_eq!(cart.line_count(), 2);
    assert_eq!(cart.subtotal(), a.price + b.price);
}

#[test]
fn cart_badge_follows_store_changes() {
    let catalog = seed::catalog();
    let session = CartSession::started();
    let cart = session.store().unwrap();

    let badge = std::sync::Arc::new(std::sync::atomic::AtomicU64::new(0));
    let sink = std::sync::Arc::clone(&badge);
    cart.subscribe(move |c| sink.store(c.line_count(), std::sync::atomic::Ordering::SeqCst));

    for product in catalog.featured() {
        cart.add_item(product);
    }
    assert_eq!(badge.load(std::sync::atomic::Ordering::SeqCst), 4);

    cart.clear();
    assert_eq!(badge.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[test]
fn reading_cart_outside_session_fails() {
    let mut session = CartSession::new();
    assert!(matches!(session.store(), Err(CommerceError::StoreUninitialized)));

    session.begin();
    session.end();
    assert!(matches!(session.store(), Err(CommerceError::StoreUninitialized)));
}
