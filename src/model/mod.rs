//! Pure data structures (DTOs), several implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod booking;
pub mod cart;
pub mod menu;
pub mod notice;
pub mod order;
pub mod package;
pub mod payment;
pub mod validate;

pub use booking::*;
pub use cart::*;
pub use menu::*;
pub use notice::*;
pub use order::*;
pub use package::*;
pub use payment::*;
