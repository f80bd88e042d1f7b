//! Generic actor framework for resource management.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns and mutates entities
//! - [`ResourceClient`] - Cloneable handle that sends requests to an actor
//! - [`ActorClient`] - Shared `get`/`delete` for the domain clients
//! - [`FrameworkError`] - Plumbing errors plus boxed entity errors
//!
//! # Testing
//!
//! See [`mock`] for scripted clients that stand in for running actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
