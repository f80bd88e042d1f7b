//! # Booking Actor
//!
//! Catering reservations. Like delivery orders, creating a [`CateringBooking`] performs the
//! submission: resolve the package, upload the payment slip to
//! `payment-slips/catering/{millis}-{file}`, work out the total and (for `dp`) the
//! reservation deposit, then insert the `catering_bookings` row.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`CateringBooking`]
//! - [`error`] - [`BookingError`]
//! - [`BookingContext`] - Dependencies injected at `run()`
//! - [`new()`] - Factory function that creates the actor and its client

pub mod entity;
pub mod error;

pub use error::*;

use crate::backend::Backend;
use crate::clients::BookingClient;
use crate::framework::ResourceActor;
use crate::model::{CateringBooking, PackageCatalog};

/// What the Booking actor needs to submit a booking.
#[derive(Clone)]
pub struct BookingContext {
    pub backend: Backend,
    pub catalog: PackageCatalog,
    /// Share of the package price due up front for `dp` bookings.
    pub deposit_rate: f64,
    /// Storage bucket for payment slips.
    pub bucket: String,
    /// Table that receives booking rows.
    pub table: String,
}

/// Creates a new Booking actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<CateringBooking>, BookingClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, BookingClient::new(generic_client))
}
