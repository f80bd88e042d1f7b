//! # Cart Actor
//!
//! One [`CartSession`] per shopper, each wrapping a [`Cart`](crate::model::Cart). Sessions
//! are opened explicitly and addressed by [`CartId`](crate::model::CartId), so every
//! ordering surface that holds the id sees the same selections.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`CartSession`]
//! - [`error`] - [`CartError`]
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Dependencies
//!
//! The actor's context is a [`MenuClient`](crate::clients::MenuClient), used by
//! [`CartAction::AddFromMenu`] to price lines from the live menu:
//!
//! ```rust,ignore
//! let (cart_actor, carts) = cart_actor::new(32);
//! tokio::spawn(cart_actor.run(menu.clone()));
//!
//! let cart = carts.open_cart(CartCreate::empty()).await?;
//! carts.add_menu_item(cart, lechon, None).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::CartSession;

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<CartSession>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CartClient::new(generic_client))
}
