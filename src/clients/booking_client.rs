//! # Booking Client
//!
//! Provides a high‑level API for interacting with the `CateringBooking` actor.
use crate::booking_actor::BookingError;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{BookingCreate, BookingId, CateringBooking, OrderStatus, OrderUpdate};
use async_trait::async_trait;
use tracing::{debug, error, info, instrument, warn};

/// Client for interacting with the Booking actor.
#[derive(Clone)]
pub struct BookingClient {
    inner: ResourceClient<CateringBooking>,
}

impl BookingClient {
    pub fn new(inner: ResourceClient<CateringBooking>) -> Self {
        Self { inner }
    }

    /// Submits a catering booking. Use [`BookingError::notice`] for what to show on failure.
    #[instrument(skip(self, params), fields(package = %params.package_id, payment = %params.details.payment_method))]
    pub async fn submit_booking(&self, params: BookingCreate) -> Result<BookingId, BookingError> {
        debug!("Sending request");
        match self.inner.create(params).await.map_err(Self::map_error) {
            Ok(id) => {
                info!(booking = %id, "Booking submitted");
                Ok(id)
            }
            Err(e @ BookingError::ValidationError(_)) => {
                warn!(error = %e, "Booking rejected");
                Err(e)
            }
            Err(e) => {
                error!(error = %e, "Error submitting booking");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: BookingId,
        status: OrderStatus,
    ) -> Result<CateringBooking, BookingError> {
        debug!("Sending request");
        self.inner
            .update(id, OrderUpdate { status })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<CateringBooking> for BookingClient {
    type Error = BookingError;

    fn inner(&self) -> &ResourceClient<CateringBooking> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => BookingError::NotFound(id),
            other => other
                .downcast_entity::<BookingError>()
                .unwrap_or_else(|e| BookingError::ActorCommunicationError(e.to_string())),
        }
    }
}
