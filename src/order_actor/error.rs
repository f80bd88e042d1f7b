//! Error types for the Order actor.

use crate::backend::{InsertError, UploadError};
use crate::cart_actor::CartError;
use crate::model::{Notice, OrderStatus};
use thiserror::Error;

pub const EMPTY_CART: &str = "Please select at least one item to order.";
pub const MISSING_RECEIPT: &str = "Please upload your payment receipt.";

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid. Carries the customer-facing message.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// The session cart could not be read.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// The receipt could not be stored.
    #[error("Receipt upload failed: {0}")]
    Upload(#[from] UploadError),

    /// The order row could not be stored.
    #[error("Order insert failed: {0}")]
    Insert(#[from] InsertError),

    #[error("Order serialization failed: {0}")]
    Serialization(String),

    #[error("Cannot change status from {from:?} to {to:?}")]
    InvalidStatus { from: OrderStatus, to: OrderStatus },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl OrderError {
    /// What the customer should see; remote failures stay generic.
    pub fn notice(&self) -> Notice {
        match self {
            OrderError::ValidationError(message) => {
                let title = match message.as_str() {
                    EMPTY_CART => "No items selected",
                    MISSING_RECEIPT => "Receipt required",
                    _ => "Invalid order details",
                };
                Notice::error(title, message.clone())
            }
            _ => Notice::submission_failed("order"),
        }
    }
}
