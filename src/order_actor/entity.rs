//! [`ActorEntity`] implementation for [`FoodOrder`].
//!
//! `on_create` is the whole submission. Any failure before the insert completes discards the
//! order and leaves the cart as it was, so the customer can simply submit again. Once stored,
//! only the ordered quantities leave the cart: lines added from another surface while the
//! receipt was uploading stay for the next order.

use crate::clients::CartClient;
use crate::framework::ActorEntity;
use crate::model::{
    validate, FoodOrder, FoodOrderCreate, LineItem, OrderId, OrderItem, OrderUpdate,
};
use crate::order_actor::{OrderContext, OrderError, EMPTY_CART, MISSING_RECEIPT};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

fn invalid(message: String) -> OrderError {
    OrderError::ValidationError(message)
}

/// Upload destination for a delivery receipt.
pub fn receipt_path(file_name: &str) -> String {
    format!(
        "receipts/food-delivery/{}-{}",
        Utc::now().timestamp_millis(),
        file_name
    )
}

impl FoodOrder {
    async fn checkout_cart(&self, carts: &CartClient, ordered: Vec<LineItem>) {
        // The row is already stored; a stale cart is only cosmetic.
        match carts.checkout(self.cart_id, ordered).await {
            Ok(remaining) if !remaining.is_empty() => info!(
                order = %self.id,
                cart = %self.cart_id,
                remaining = remaining.total_items,
                "Cart kept later additions"
            ),
            Ok(_) => {}
            Err(e) => warn!(
                order = %self.id,
                cart = %self.cart_id,
                error = %e,
                "Order stored but cart not checked out"
            ),
        }
    }
}

#[async_trait]
impl ActorEntity for FoodOrder {
    type Id = OrderId;
    type Create = FoodOrderCreate;
    type Update = OrderUpdate;
    type Action = (); // No custom actions for now
    type ActionResult = ();
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: FoodOrderCreate) -> Result<Self, OrderError> {
        let details = &params.details;
        validate::min_chars(&details.customer_name, 2, "Name must be at least 2 characters")
            .map_err(invalid)?;
        validate::min_chars(&details.phone, 10, "Please enter a valid phone number")
            .map_err(invalid)?;
        validate::min_chars(
            &details.delivery_address,
            10,
            "Please enter a complete delivery address",
        )
        .map_err(invalid)?;
        if !details.payment_method.allowed_for_delivery() {
            return Err(invalid(format!(
                "Payment method '{}' is not accepted for delivery orders",
                details.payment_method
            )));
        }

        Ok(Self::new(id, params))
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let summary = ctx.carts.summary(self.cart_id).await?;
        if summary.is_empty() {
            return Err(invalid(EMPTY_CART.into()));
        }
        if self.details.payment_method.requires_proof() && self.receipt.is_none() {
            return Err(invalid(MISSING_RECEIPT.into()));
        }

        if let Some(receipt) = self.receipt.take() {
            let path = receipt_path(&receipt.file_name);
            let url = ctx
                .backend
                .storage
                .upload(&ctx.bucket, &path, &receipt)
                .await?;
            info!(order = %self.id, %url, "Receipt uploaded");
            self.receipt_url = Some(url);
        }

        self.total_amount = summary.total_price;
        self.items = summary.lines.iter().cloned().map(OrderItem::from).collect();

        let row = serde_json::to_value(self.record())
            .map_err(|e| OrderError::Serialization(e.to_string()))?;
        let stored = ctx.backend.records.insert(&ctx.table, row).await?;
        info!(order = %self.id, table = %ctx.table, total = self.total_amount, "Order stored");
        self.stored = Some(stored);

        self.checkout_cart(&ctx.carts, summary.lines).await;
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &OrderContext) -> Result<(), OrderError> {
        if !self.status.can_become(update.status) {
            return Err(OrderError::InvalidStatus {
                from: self.status,
                to: update.status,
            });
        }
        self.status = update.status;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &OrderContext) -> Result<(), OrderError> {
        Ok(())
    }
}
