//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them at `run(context)`:
//!
//! ```rust,ignore
//! impl ActorEntity for MenuItem    { type Context = (); }
//! impl ActorEntity for CartSession { type Context = MenuClient; }
//! impl ActorEntity for FoodOrder   { type Context = OrderContext; } // carts + backend
//! impl ActorEntity for CateringBooking { type Context = BookingContext; } // backend + packages
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None` once the queue is drained
//! 3. **Await completion** - [`CateringSystem::shutdown`] joins every actor task
//!
//! Contexts hold client clones, so an actor only stops after every actor that depends on it
//! has stopped. This works because the graph has no cycles.
//!
//! ## Observability
//!
//! See [`tracing`] for [`setup_tracing`].

pub mod catering_system;
pub mod tracing;

pub use catering_system::*;
pub use self::tracing::*;
