//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`
//! (defaulting to `info`). Module paths are hidden; the actor loop tags its events with
//! `entity_type` and the entity `id` instead.
//!
//! ```bash
//! RUST_LOG=info cargo run                          # lifecycle, submissions, uploads
//! RUST_LOG=debug cargo run                         # every request with its payload
//! RUST_LOG=catering_hub::backend=debug cargo run   # storage and database only
//! ```
//!
//! A delivery order at `info` reads roughly:
//!
//! ```text
//! INFO submit_order: Receipt uploaded order=order_1 url=http://localhost:54321/storage/v1/object/public/payment-proofs/receipts/food-delivery/1760000000000-gcash.png
//! INFO submit_order: Order stored order=order_1 table=food_orders total=3470
//! INFO submit_order: Created entity_type="FoodOrder" id=order_1 size=1
//! INFO submit_order: Order submitted order=order_1
//! ```
//!
//! Payment proof bytes never reach the logs; `PaymentProof`'s `Debug` prints only the name,
//! content type and length.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type replaces the module path
        .compact()
        .init();
}
