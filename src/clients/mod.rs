//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod booking_client;
pub mod cart_client;
pub mod menu_client;
pub mod order_client;

pub use crate::framework::ActorClient;
pub use booking_client::*;
pub use cart_client::*;
pub use menu_client::*;
pub use order_client::*;
