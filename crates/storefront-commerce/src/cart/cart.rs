//! Cart and line item types, and the transition function that mutates them.

use crate::cart::CartAction;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product fields captured when a product is first added to the cart.
///
/// Later catalog changes do not reach lines already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSnapshot {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Product slug (for linking back to the product page).
    pub slug: String,
    /// Price at the time of adding.
    pub unit_price: Money,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            slug: product.slug.clone(),
            unit_price: product.price,
        }
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Snapshotted product fields.
    #[serde(flatten)]
    pub product: ProductSnapshot,
    /// Quantity, always at least 1 while the line is in a cart.
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: impl Into<ProductSnapshot>, quantity: u32) -> Self {
        Self {
            product: product.into(),
            quantity,
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product.product_id
    }

    /// `quantity × unit_price`.
    pub fn total(&self) -> Money {
        self.product.unit_price * self.quantity
    }
}

/// A shopping cart: lines keyed by product id, in first-add order.
///
/// Holds at most one line per product and never a line with quantity zero.
/// All mutation goes through [`Cart::apply`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action. Returns whether the cart changed.
    pub fn apply(&mut self, action: CartAction) -> bool {
        match action {
            CartAction::AddItem(product) => {
                if let Some(line) = self.line_mut(&product.product_id) {
                    line.quantity = line.quantity.saturating_add(1);
                } else {
                    self.lines.push(CartLine::new(product, 1));
                }
                true
            }
            CartAction::RemoveItem(product_id) => self.remove(&product_id),
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => {
                if quantity <= 0 {
                    return self.remove(&product_id);
                }
                let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                match self.line_mut(&product_id) {
                    Some(line) if line.quantity != quantity => {
                        line.quantity = quantity;
                        true
                    }
                    _ => false,
                }
            }
            CartAction::Clear => {
                let changed = !self.lines.is_empty();
                self.lines.clear();
                changed
            }
            CartAction::Restore(lines) => {
                let restored = normalize(lines);
                let changed = restored != self.lines;
                self.lines = restored;
                changed
            }
        }
    }

    /// Lines in first-add order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id() == product_id)
    }

    /// Total item count (sum of quantities).
    pub fn line_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Number of distinct products.
    pub fn unique_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of line totals at snapshot prices.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id() == product_id)
    }

    fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product_id() != product_id);
        self.lines.len() < len_before
    }
}

/// Merge duplicate products (keeping the first position) and drop empty lines.
fn normalize(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut out: Vec<CartLine> = Vec::with_capacity(lines.len());
    for line in lines {
        if let Some(existing) = out.iter_mut().find(|l| l.product_id() == line.product_id()) {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
        } else {
            out.push(line);
        }
    }
    out.retain(|l| l.quantity > 0);
    out
}
