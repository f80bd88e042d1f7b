//! # Catering Hub
//!
//! > **Carts, delivery orders and catering bookings for a food catering storefront.**
//!
//! Every resource is an actor-managed entity: the menu, the shoppers' carts, submitted
//! delivery orders and catering bookings. Each actor owns its entities and handles one
//! message at a time, so a cart is never mutated concurrently and no locks guard entity state.
//!
//! ## 🏗️ Design
//!
//! ### Explicit cart sessions
//! There is no ambient, process-wide cart. A surface opens a session with
//! [`CartClient::open_cart`](clients::CartClient::open_cart) and passes the
//! [`CartId`](model::CartId) along; anything holding the id and a client clone sees the same
//! selections.
//!
//! ### Prices are locked at add time
//! A cart line caches the name and unit price it was added with. Later menu price changes do
//! not reach existing lines; adding the item again refreshes the cached price.
//!
//! ### Submissions are entity creation
//! Submitting an order or a booking creates the entity; its `on_create` hook uploads the
//! payment proof and inserts the row. If either fails the entity is discarded and, for
//! delivery orders, the cart is left as it was.
//!
//! ### Type-safe errors
//! Each actor has its own `thiserror` enum ([`CartError`](cart_actor::CartError),
//! [`OrderError`](order_actor::OrderError), ...). The framework carries them boxed and the
//! clients recover the typed error, so callers can match on
//! `OrderError::ValidationError` vs `OrderError::Upload`.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] - generic [`ResourceActor`](framework::ResourceActor), client, entity trait and mocks
//! - [`model`] - the [`Cart`](model::Cart) aggregator and the DTOs of every resource
//! - [`menu_actor`], [`cart_actor`], [`order_actor`], [`booking_actor`] - the entities' behaviour
//! - [`clients`] - domain clients wrapping `ResourceClient`
//! - [`backend`] - file storage and record store ports, with in-memory implementations
//! - [`config`] - [`AppConfig`](config::AppConfig) loading
//! - [`lifecycle`] - [`CateringSystem`](lifecycle::CateringSystem) and tracing setup
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod backend;
pub mod booking_actor;
pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
