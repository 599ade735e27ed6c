//! Cart commands.

use crate::cart::{CartLine, ProductSnapshot};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A cart mutation, applied by [`Cart::apply`](crate::cart::Cart::apply).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum CartAction {
    /// Add one unit; creates the line on first add.
    AddItem(ProductSnapshot),
    /// Drop the line for a product, if any.
    RemoveItem(ProductId),
    /// Set a line's quantity exactly. Zero or below removes the line;
    /// a product without a line is left alone.
    SetQuantity { product_id: ProductId, quantity: i64 },
    /// Remove every line.
    Clear,
    /// Replace the contents with previously captured lines.
    Restore(Vec<CartLine>),
}

impl CartAction {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::RemoveItem(_) => "remove_item",
            CartAction::SetQuantity { .. } => "set_quantity",
            CartAction::Clear => "clear",
            CartAction::Restore(_) => "restore",
        }
    }

    /// Product the action targets, if it targets one.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            CartAction::AddItem(p) => Some(&p.product_id),
            CartAction::RemoveItem(id) | CartAction::SetQuantity { product_id: id, .. } => Some(id),
            CartAction::Clear | CartAction::Restore(_) => None,
        }
    }
}
