//! # Menu Actor
//!
//! Hosts the catalog of dishes and trays. Besides CRUD it answers [`MenuAction::Quote`],
//! which the cart actor uses to price a line from the live menu.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`]
//! - [`actions`] - [`MenuAction`] and [`MenuActionResult`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ```rust,ignore
//! let (actor, menu) = menu_actor::new(32);
//! tokio::spawn(actor.run(()));
//!
//! let id = menu.create_item(MenuItemCreate::new("Lechon Belly", "pork", 1600.0)).await?;
//! let quote = menu.quote(id, None).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::MenuClient;
use crate::framework::ResourceActor;
use crate::model::MenuItem;

/// Creates a new Menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MenuClient::new(generic_client))
}
