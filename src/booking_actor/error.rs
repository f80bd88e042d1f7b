//! Error types for the Booking actor.

use crate::backend::{InsertError, UploadError};
use crate::model::{Notice, OrderStatus};
use thiserror::Error;

pub const NO_PACKAGE: &str = "Please select a catering package.";
pub const MISSING_SLIP: &str = "Please upload your payment slip or deposit receipt.";

/// Errors that can occur during booking operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(String),

    /// The booking data provided is invalid. Carries the customer-facing message.
    #[error("Booking validation error: {0}")]
    ValidationError(String),

    #[error("Payment slip upload failed: {0}")]
    Upload(#[from] UploadError),

    #[error("Booking insert failed: {0}")]
    Insert(#[from] InsertError),

    #[error("Booking serialization failed: {0}")]
    Serialization(String),

    #[error("Cannot change status from {from:?} to {to:?}")]
    InvalidStatus { from: OrderStatus, to: OrderStatus },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for BookingError {
    fn from(msg: String) -> Self {
        BookingError::ActorCommunicationError(msg)
    }
}

impl BookingError {
    /// What the customer should see; remote failures stay generic.
    pub fn notice(&self) -> Notice {
        match self {
            BookingError::ValidationError(message) => {
                let title = match message.as_str() {
                    NO_PACKAGE => "Package not selected",
                    MISSING_SLIP => "Payment slip required",
                    _ => "Invalid booking details",
                };
                Notice::error(title, message.clone())
            }
            _ => Notice::submission_failed("booking"),
        }
    }
}
