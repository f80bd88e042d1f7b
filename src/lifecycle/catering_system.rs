use crate::backend::Backend;
use crate::booking_actor::{self, BookingContext};
use crate::clients::{BookingClient, CartClient, MenuClient, OrderClient};
use crate::config::AppConfig;
use crate::model::PackageCatalog;
use crate::order_actor::{self, OrderContext};
use crate::{cart_actor, menu_actor};
use tracing::{error, info};

/// Starts, wires and stops every actor of the catering storefront.
///
/// # Architecture
///
/// - **Menu actor**: the catalog (no dependencies)
/// - **Cart actor**: shopper sessions, quotes prices from the menu
/// - **Order actor**: delivery orders, reads carts and writes to the backend
/// - **Booking actor**: catering bookings, writes to the backend
///
/// The dependency graph is acyclic (order → cart → menu), so dropping the clients is enough
/// to stop everything.
///
/// # Example
///
/// ```ignore
/// let (backend, _, _) = Backend::in_memory(&config.storage.public_base_url);
/// let system = CateringSystem::new(&config, backend);
///
/// let cart = system.cart_client.open_cart(CartCreate::empty()).await?;
/// system.cart_client.add_menu_item(cart, lechon, None).await?;
/// let order = system.order_client.submit_order(params).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CateringSystem {
    pub menu_client: MenuClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub booking_client: BookingClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CateringSystem {
    /// Spawns all actors with the default package catalog. Must be called inside a Tokio runtime.
    pub fn new(config: &AppConfig, backend: Backend) -> Self {
        Self::with_catalog(config, backend, PackageCatalog::default())
    }

    pub fn with_catalog(config: &AppConfig, backend: Backend, catalog: PackageCatalog) -> Self {
        let buffer = config.channel_buffer;

        // 1. Create actors (no dependencies)
        let (menu_actor, menu_client) = menu_actor::new(buffer);
        let (cart_actor, cart_client) = cart_actor::new(buffer);
        let (order_actor, order_client) = order_actor::new(buffer);
        let (booking_actor, booking_client) = booking_actor::new(buffer);

        // 2. Start actors with injected context
        let menu_handle = tokio::spawn(menu_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(menu_client.clone()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            carts: cart_client.clone(),
            backend: backend.clone(),
            bucket: config.storage.bucket.clone(),
            table: config.tables.food_orders.clone(),
        }));
        let booking_handle = tokio::spawn(booking_actor.run(BookingContext {
            backend,
            catalog,
            deposit_rate: config.pricing.deposit_rate,
            bucket: config.storage.bucket.clone(),
            table: config.tables.catering_bookings.clone(),
        }));

        info!(buffer, "Catering system started");
        Self {
            menu_client,
            cart_client,
            order_client,
            booking_client,
            // Dependents first: each waits on the clients it holds into the next one
            handles: vec![order_handle, booking_handle, cart_handle, menu_handle],
        }
    }

    /// Drops every client and waits for the actors to drain and exit.
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catering system...");

        drop(self.order_client);
        drop(self.booking_client);
        drop(self.cart_client);
        drop(self.menu_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Catering system shutdown complete.");
        Ok(())
    }
}
