//! # Order Client
//!
//! Provides a high‑level API for interacting with the `FoodOrder` actor.
//! The submission itself (cart read, upload, insert) happens in the actor's `on_create` hook.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{FoodOrder, FoodOrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, error, info, instrument, warn};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<FoodOrder>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<FoodOrder>) -> Self {
        Self { inner }
    }

    /// Submits a delivery order for the items in `params.cart_id`.
    ///
    /// On success the ordered quantities have left the cart. On failure it is left as it was; use
    /// [`OrderError::notice`] for what to show the customer.
    #[instrument(skip(self, params), fields(cart = %params.cart_id, payment = %params.details.payment_method))]
    pub async fn submit_order(&self, params: FoodOrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        match self.inner.create(params).await.map_err(Self::map_error) {
            Ok(id) => {
                info!(order = %id, "Order submitted");
                Ok(id)
            }
            Err(e @ OrderError::ValidationError(_)) => {
                warn!(error = %e, "Order rejected");
                Err(e)
            }
            Err(e) => {
                error!(error = %e, "Error submitting order");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<FoodOrder, OrderError> {
        debug!("Sending request");
        self.inner
            .update(id, OrderUpdate { status })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<FoodOrder> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<FoodOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .downcast_entity::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}
