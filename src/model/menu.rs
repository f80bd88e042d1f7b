/// A dish or tray on the catering menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`menu_actor`](crate::menu_actor) for the `Quote` action that carts use to price it.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_{}", self.0)
    }
}

/// A tray size with its own price, e.g. "Small (8-10 pax)".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeOption {
    pub size: String,
    pub price: f64,
}

impl SizeOption {
    pub fn new(size: impl Into<String>, price: f64) -> Self {
        Self {
            size: size.into(),
            price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Base price, used when the item has no size variants.
    pub price: f64,
    pub sizes: Vec<SizeOption>,
    pub available: bool,
    pub popular: bool,
}

impl MenuItem {
    pub fn size(&self, size: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| s.size == size)
    }
}

/// Payload for adding an item to the menu.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub sizes: Vec<SizeOption>,
    pub available: bool,
    pub popular: bool,
}

impl MenuItemCreate {
    /// An available, single-priced item with no description.
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: String::new(),
            price,
            sizes: Vec::new(),
            available: true,
            popular: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<SizeOption>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }
}

// DTOs for menu updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub price: Option<f64>,
    pub available: Option<bool>,
    pub popular: Option<bool>,
}

/// The name and unit price a cart line should cache for a menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuQuote {
    /// Cart key: the menu id, suffixed with `:{size}` for sized items.
    pub item_key: String,
    pub name: String,
    pub unit_price: f64,
    pub size: Option<String>,
}
