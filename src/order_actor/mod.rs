//! # Order Actor
//!
//! Food delivery orders. Creating a [`FoodOrder`] runs the submission in
//! [`ActorEntity::on_create`](crate::framework::ActorEntity::on_create):
//!
//! 1. check the customer details (in `from_create_params`)
//! 2. read the session cart; empty carts and missing receipts are rejected
//! 3. upload the receipt to `receipts/food-delivery/{millis}-{file}`
//! 4. insert the `food_orders` row
//! 5. take the ordered quantities out of the cart
//!
//! A failure in steps 2-4 drops the order and leaves the cart untouched.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`FoodOrder`]
//! - [`error`] - [`OrderError`] and the customer-facing messages
//! - [`OrderContext`] - Dependencies injected at `run()`
//! - [`new()`] - Factory function that creates the actor and its client

pub mod entity;
pub mod error;

pub use error::*;

use crate::backend::Backend;
use crate::clients::{CartClient, OrderClient};
use crate::framework::ResourceActor;
use crate::model::FoodOrder;

/// What the Order actor needs to submit an order.
#[derive(Clone)]
pub struct OrderContext {
    pub carts: CartClient,
    pub backend: Backend,
    /// Storage bucket for receipts.
    pub bucket: String,
    /// Table that receives order rows.
    pub table: String,
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<FoodOrder>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
