//! Custom actions for the Cart actor.
//!
//! Every cart mutation goes through one of these, so the actor's sequential message loop is
//! the only writer of a session's [`Cart`](crate::model::Cart).

use crate::model::{CartSummary, LineItem, MenuItemId};

/// Custom actions for CartSession entities.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit with the given details; the price is locked in until the next add.
    Add {
        item_id: String,
        name: String,
        unit_price: f64,
    },
    /// Quotes a menu item (optionally in a size) and adds one unit of it.
    ///
    /// # Errors
    /// Fails with [`CartError::Menu`](super::CartError::Menu) when the menu refuses the quote.
    AddFromMenu {
        item: MenuItemId,
        size: Option<String>,
    },
    /// Removes one unit; absent items are ignored.
    Remove(String),
    Clear,
    /// Takes the quantities of a submitted order out of the cart. Units added since the
    /// order was read are kept.
    Checkout(Vec<LineItem>),
    Summary,
    OrderMessage,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    /// New quantity of the line.
    Add(u32),
    /// Cart key the menu item was stored under, and its new quantity.
    AddFromMenu { item_key: String, quantity: u32 },
    /// Remaining quantity of the line.
    Remove(u32),
    Clear,
    /// What is left in the cart.
    Checkout(CartSummary),
    Summary(CartSummary),
    OrderMessage(String),
}
