//! Error types for the Cart actor.

use crate::menu_actor::MenuError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// No open cart session has this ID.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// The menu refused to quote the requested item.
    #[error("Menu error: {0}")]
    Menu(#[from] MenuError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
