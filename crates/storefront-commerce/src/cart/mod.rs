//! Shopping cart module.
//!
//! Contains the cart and its line items, the actions that mutate it, the
//! shared store and the session that scopes it.

mod action;
mod cart;
mod session;
mod store;

pub use action::CartAction;
pub use cart::{Cart, CartLine, ProductSnapshot};
pub use session::CartSession;
pub use store::{CartListener, CartStore, SubscriptionId};
