//! Custom actions for the Menu actor.
//!
//! Carts never read a [`MenuItem`](crate::model::MenuItem) directly; they ask for a quote,
//! which applies the availability and size rules in one place.

/// Custom actions for MenuItem entities.
#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Resolves the cart line name and unit price, optionally for a specific size.
    ///
    /// # Errors
    /// Fails when the item is unavailable or the size is not offered.
    Quote(Option<String>),
}

/// Results from MenuActions - variants match 1:1 with MenuAction
#[derive(Debug, Clone)]
pub enum MenuActionResult {
    Quote(crate::model::MenuQuote),
}
