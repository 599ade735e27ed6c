//! Shared cart store.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::cart::{Cart, CartAction, CartLine};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;

/// Callback invoked with the new cart after every change.
pub type CartListener = Arc<dyn Fn(&Cart) + Send + Sync>;

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The cart shared by every consumer in a session.
///
/// Mutations are applied one at a time under a write lock, so readers see
/// either the state before an action or after it. Listeners run after the
/// lock is released, with a snapshot of the committed cart, and only when
/// the action changed something.
///
/// Snapshots reach listeners in commit order, one at a time. A dispatch
/// made while another thread (or a listener) is delivering queues its
/// snapshot for that delivery loop and returns without waiting.
pub struct CartStore {
    cart: RwLock<Cart>,
    listeners: RwLock<Vec<(SubscriptionId, CartListener)>>,
    next_subscription: AtomicU64,
    delivery: Mutex<Delivery>,
}

/// Committed snapshots not yet handed to listeners.
#[derive(Default)]
struct Delivery {
    pending: VecDeque<Cart>,
    draining: bool,
}

impl CartStore {
    /// Create a store holding an empty cart.
    pub fn new() -> Self {
        Self::with_cart(Cart::new())
    }

    pub fn with_cart(cart: Cart) -> Self {
        Self {
            cart: RwLock::new(cart),
            listeners: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
            delivery: Mutex::new(Delivery::default()),
        }
    }

    /// Apply an action. Returns whether the cart changed.
    pub fn dispatch(&self, action: CartAction) -> bool {
        let kind = action.kind();
        let product = action.product_id().cloned();

        let should_drain = {
            let mut cart = self.cart.write();
            if !cart.apply(action) {
                tracing::trace!(action = kind, product = ?product, "cart unchanged");
                return false;
            }
            tracing::debug!(
                action = kind,
                product = ?product,
                items = cart.line_count(),
                subtotal = %cart.subtotal(),
                "cart updated"
            );

            // Enqueue while the write lock is held so queue order is commit order.
            let mut delivery = self.delivery.lock();
            delivery.pending.push_back(cart.clone());
            let already_draining = std::mem::replace(&mut delivery.draining, true);
            !already_draining
        };

        if should_drain {
            self.drain();
        }
        true
    }

    /// Add one unit of `product`, capturing its current name and price.
    pub fn add_item(&self, product: &Product) {
        tracing::debug!(product = %product.id, name = %product.name, "added product to cart");
        self.dispatch(CartAction::AddItem(product.into()));
    }

    pub fn remove_item(&self, product_id: &ProductId) {
        self.dispatch(CartAction::RemoveItem(product_id.clone()));
    }

    pub fn set_quantity(&self, product_id: &ProductId, quantity: i64) {
        self.dispatch(CartAction::SetQuantity {
            product_id: product_id.clone(),
            quantity,
        });
    }

    pub fn clear(&self) {
        self.dispatch(CartAction::Clear);
    }

    /// Copy of the current lines.
    pub fn lines(&self) -> Vec<CartLine> {
        self.cart.read().lines().to_vec()
    }

    /// Sum of quantities, for the cart badge.
    pub fn line_count(&self) -> u64 {
        self.cart.read().line_count()
    }

    pub fn subtotal(&self) -> Money {
        self.cart.read().subtotal()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.read().is_empty()
    }

    /// Copy of the whole cart.
    pub fn snapshot(&self) -> Cart {
        self.cart.read().clone()
    }

    /// Register a listener for cart changes.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Cart) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write();
        let len_before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() < len_before
    }

    fn drain(&self) {
        loop {
            let cart = {
                let mut delivery = self.delivery.lock();
                match delivery.pending.pop_front() {
                    Some(cart) => cart,
                    None => {
                        delivery.draining = false;
                        return;
                    }
                }
            };
            self.notify(&cart);
        }
    }

    fn notify(&self, cart: &Cart) {
        // Clone out so listeners may subscribe or dispatch re-entrantly.
        let listeners: Vec<CartListener> =
            self.listeners.read().iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in listeners {
            listener(cart);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &*self.cart.read())
            .field("listeners", &self.listeners.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), "oils", Money::new(cents))
    }

    #[test]
    fn test_store_operations() {
        let store = CartStore::new();
        let a = product("a", 2499);
        let b = product("b", 1299);

        store.add_item(&a);
        store.add_item(&a);
        store.add_item(&b);
        assert_eq!(store.line_count(), 3);
        assert_eq!(store.subtotal(), Money::new(2 * 2499 + 1299));

        store.set_quantity(&a.id, 1);
        assert_eq!(store.lines().len(), 2);
        assert_eq!(store.line_count(), 2);

        store.remove_item(&b.id);
        assert_eq!(store.line_count(), 1);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_listeners_see_committed_state() {
        let store = CartStore::new();
        let seen = Arc::new(RwLock::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |cart| sink.write().push(cart.line_count()));

        let a = product("a", 100);
        store.add_item(&a);
        store.add_item(&a);
        store.set_quantity(&a.id, 0);

        assert_eq!(*seen.read(), vec![1, 2, 0]);
    }

    #[test]
    fn test_no_notification_without_change() {
        let store = CartStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.remove_item(&ProductId::new("missing"));
        store.set_quantity(&ProductId::new("missing"), 4);
        store.clear();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let store = CartStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.add_item(&product("a", 100));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_item(&product("a", 100));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_may_read_store() {
        let store = Arc::new(CartStore::new());
        let observed = Arc::new(AtomicU64::new(0));
        let (inner, sink) = (Arc::clone(&store), Arc::clone(&observed));
        store.subscribe(move |_| sink.store(inner.line_count(), Ordering::SeqCst));

        store.add_item(&product("a", 100));
        assert_eq!(observed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_may_dispatch() {
        let store = Arc::new(CartStore::new());
        let seen = Arc::new(RwLock::new(Vec::new()));
        let (inner, sink) = (Arc::clone(&store), Arc::clone(&seen));
        let b = product("b", 200);
        store.subscribe(move |cart| {
            sink.write().push(cart.line_count());
            if cart.line_count() == 1 {
                inner.add_item(&b);
            }
        });

        store.add_item(&product("a", 100));
        assert_eq!(*seen.read(), vec![1, 2]);
        assert_eq!(store.line_count(), 2);
    }

    #[test]
    fn test_slow_listener_sees_commits_in_order() {
        let store = Arc::new(CartStore::new());
        let seen = Arc::new(RwLock::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |cart| {
            if cart.line_count() == 1 {
                std::thread::sleep(Duration::from_millis(200));
            }
            sink.write().push(cart.line_count());
        });

        let a = product("a", 100);
        let first = {
            let (store, a) = (Arc::clone(&store), a.clone());
            std::thread::spawn(move || store.add_item(&a))
        };
        std::thread::sleep(Duration::from_millis(50));
        let second = {
            let (store, a) = (Arc::clone(&store), a.clone());
            std::thread::spawn(move || store.add_item(&a))
        };
        first.join().unwrap();
        second.join().unwrap();

        assert_eq!(store.line_count(), 2);
        assert_eq!(*seen.read(), vec![1, 2]);
    }

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let store = Arc::new(CartStore::new());
        let last_seen = Arc::new(AtomicU64::new(0));
        let sink = Arc::clone(&last_seen);
        store.subscribe(move |cart| sink.store(cart.line_count(), Ordering::SeqCst));
        let a = product("a", 100);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let a = a.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        store.add_item(&a);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(store.line_count(), 400);
        assert_eq!(store.lines().len(), 1);
        assert_eq!(last_seen.load(Ordering::SeqCst), 400);
    }
}
