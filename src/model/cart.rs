//! The cart aggregator and the per-session entity that wraps it.
//!
//! [`Cart`] is plain synchronous state: item id → quantity, plus the name and unit price
//! cached when the item was last added. [`CartSession`] gives a cart an identity so the
//! cart actor can host one per browsing session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Write as _};

/// Name shown for a line whose details were never cached.
pub const UNKNOWN_ITEM: &str = "Unknown Item";

/// Name and unit price captured at add time.
///
/// Never re-validated against the menu: a cart keeps the price an item was added at even if
/// the menu price changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub name: String,
    pub unit_price: f64,
}

/// One itemized cart line, ready for display or for an order row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl LineItem {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Derived totals plus the itemized lines, as one snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartSummary {
    pub total_items: u32,
    pub total_price: f64,
    pub lines: Vec<LineItem>,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

/// Quantities and cached details for one shopper.
///
/// Invariant: every stored quantity is at least 1. Lines are kept ordered by item id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    quantities: BTreeMap<String, u32>,
    details: BTreeMap<String, ItemDetails>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item_id` and (re)caches its name and price.
    ///
    /// Returns the new quantity.
    pub fn add(&mut self, item_id: impl Into<String>, name: impl Into<String>, unit_price: f64) -> u32 {
        let item_id = item_id.into();
        self.details.insert(
            item_id.clone(),
            ItemDetails {
                name: name.into(),
                unit_price,
            },
        );
        let quantity = self.quantities.entry(item_id).or_insert(0);
        *quantity += 1;
        *quantity
    }

    /// Removes one unit of `item_id`, dropping the line when it reaches zero.
    ///
    /// Absent items are ignored. Returns the remaining quantity.
    pub fn remove(&mut self, item_id: &str) -> u32 {
        match self.quantities.get_mut(item_id) {
            Some(quantity) if *quantity > 1 => {
                *quantity -= 1;
                *quantity
            }
            Some(_) => {
                self.quantities.remove(item_id);
                0
            }
            None => 0,
        }
    }

    /// Adds `quantity` units at once and caches the details, e.g. when restoring a saved line.
    ///
    /// A zero quantity leaves the cart unchanged. Returns the new quantity.
    pub fn restore(&mut self, line: LineItem) -> u32 {
        if line.quantity == 0 {
            return self.quantity_of(&line.item_id);
        }
        self.details.insert(
            line.item_id.clone(),
            ItemDetails {
                name: line.name,
                unit_price: line.unit_price,
            },
        );
        let quantity = self.quantities.entry(line.item_id).or_insert(0);
        *quantity = quantity.saturating_add(line.quantity);
        *quantity
    }

    /// Takes the ordered quantities out of the cart.
    ///
    /// Units added after `ordered` was read stay in the cart. Lines reaching zero are dropped
    /// together with their cached details.
    pub fn checkout(&mut self, ordered: &[LineItem]) {
        for line in ordered {
            let Some(quantity) = self.quantities.get_mut(&line.item_id) else {
                continue;
            };
            if *quantity > line.quantity {
                *quantity -= line.quantity;
            } else {
                self.quantities.remove(&line.item_id);
                self.details.remove(&line.item_id);
            }
        }
    }

    /// Empties both the quantities and the cached details.
    pub fn clear(&mut self) {
        self.quantities.clear();
        self.details.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.quantities.get(item_id).copied().unwrap_or(0)
    }

    pub fn total_item_count(&self) -> u32 {
        self.quantities.values().sum()
    }

    /// Sum of quantity × cached unit price. Lines without cached details count as zero.
    pub fn total_price(&self) -> f64 {
        self.quantities
            .iter()
            .map(|(item_id, quantity)| {
                self.details
                    .get(item_id)
                    .map_or(0.0, |d| d.unit_price * f64::from(*quantity))
            })
            // An empty f64 sum is -0.0
            .fold(0.0, |total, subtotal| total + subtotal)
    }

    pub fn line_items(&self) -> Vec<LineItem> {
        self.quantities
            .iter()
            .map(|(item_id, quantity)| {
                let (name, unit_price) = match self.details.get(item_id) {
                    Some(d) => (d.name.clone(), d.unit_price),
                    None => (UNKNOWN_ITEM.to_string(), 0.0),
                };
                LineItem {
                    item_id: item_id.clone(),
                    name,
                    unit_price,
                    quantity: *quantity,
                }
            })
            .collect()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_items: self.total_item_count(),
            total_price: self.total_price(),
            lines: self.line_items(),
        }
    }

    /// Plain-text order a customer can paste into a chat with the shop.
    ///
    /// Empty carts produce an empty string.
    pub fn order_message(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut message = String::from("Hi! I'd like to order:\n\n");
        for line in self.line_items() {
            let _ = writeln!(
                message,
                "• {}x {} - ₱{}",
                line.quantity,
                line.name,
                format_amount(line.subtotal())
            );
        }
        let _ = write!(message, "\nTotal: ₱{}\n\n", format_amount(self.total_price()));
        message.push_str("Delivery Address: [Your Address]\n");
        message.push_str("Contact Number: [Your Number]\n");
        message.push_str("Payment Method: [GCash/BPI/COD]\n\n");
        message.push_str("What time can you deliver?");
        message
    }
}

/// Whole pesos print without decimals, anything else with two.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

/// Type-safe identifier for cart sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// A shopper's cart, hosted by the cart actor.
///
/// # Actor Framework
/// Implements [`ActorEntity`](crate::framework::ActorEntity); see
/// [`cart_actor`](crate::cart_actor) for the actions it accepts.
#[derive(Debug, Clone)]
pub struct CartSession {
    pub id: CartId,
    pub cart: Cart,
}

/// Payload for opening a cart session, optionally restoring earlier lines.
#[derive(Debug, Clone, Default)]
pub struct CartCreate {
    pub lines: Vec<LineItem>,
}

impl CartCreate {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn prefilled(lines: Vec<LineItem>) -> Self {
        Self { lines }
    }
}
