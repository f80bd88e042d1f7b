//! Error types for the Menu actor.

use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// The item exists but is not currently offered.
    #[error("Menu item unavailable: {0}")]
    Unavailable(String),

    /// The requested tray size is not offered for this item.
    #[error("Unknown size '{size}' for {item}")]
    UnknownSize { item: String, size: String },

    /// The item data provided is invalid.
    #[error("Invalid menu item: {0}")]
    InvalidItem(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunicationError(msg)
    }
}
