//! Demo flow against the in-memory backend: seed a menu, fill a cart, submit a delivery order
//! and a catering booking.

use catering_hub::backend::Backend;
use catering_hub::config::AppConfig;
use catering_hub::lifecycle::{setup_tracing, CateringSystem};
use catering_hub::model::{
    BookingCreate, BookingDetails, CartCreate, DeliveryDetails, FoodOrderCreate, MenuItemCreate,
    Notice, PaymentMethod, PaymentProof, SizeOption,
};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = AppConfig::load()?;
    info!(?config, "Starting catering hub demo");

    let (backend, storage, records) = Backend::in_memory(&config.storage.public_base_url);
    let system = CateringSystem::new(&config, backend);

    // Menu
    let lechon = system
        .menu_client
        .create_item(
            MenuItemCreate::new("Lechon Belly", "pork", 1600.0)
                .with_description("Slow-roasted pork belly with crackling skin")
                .popular(),
        )
        .await?;
    let spaghetti = system
        .menu_client
        .create_item(
            MenuItemCreate::new("Cheesy Spaghetti", "pasta", 650.0).with_sizes(vec![
                SizeOption::new("Small (8-10 pax)", 650.0),
                SizeOption::new("Large (15-20 pax)", 1200.0),
            ]),
        )
        .await?;

    // Cart
    let span = tracing::info_span!("shopping");
    let cart = async {
        let cart = system.cart_client.open_cart(CartCreate::empty()).await?;
        system.cart_client.add_menu_item(cart, lechon, None).await?;
        system.cart_client.add_menu_item(cart, lechon, None).await?;
        system
            .cart_client
            .add_menu_item(cart, spaghetti, Some("Large (15-20 pax)".into()))
            .await?;
        let summary = system.cart_client.summary(cart).await?;
        info!(
            items = summary.total_items,
            total = summary.total_price,
            "Cart ready"
        );
        Ok::<_, catering_hub::cart_actor::CartError>(cart)
    }
    .instrument(span)
    .await?;

    println!("{}\n", system.cart_client.order_message(cart).await?);

    // Delivery order
    let order = FoodOrderCreate {
        cart_id: cart,
        details: DeliveryDetails {
            customer_name: "Maria Santos".into(),
            phone: "09171234567".into(),
            delivery_address: "12 Mabini St, Brgy. San Roque, Marikina".into(),
            preferred_delivery_time: Some("11:30".into()),
            payment_method: PaymentMethod::Gcash,
            notes: None,
        },
        receipt: Some(PaymentProof::new("gcash-ref-8812.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])),
    };
    let span = tracing::info_span!("delivery_order");
    let notice = match system.order_client.submit_order(order).instrument(span).await {
        Ok(id) => {
            info!(order = %id, "Delivery order placed");
            Notice::order_submitted()
        }
        Err(e) => e.notice(),
    };
    info!(title = %notice.title, "{}", notice.description);

    // Catering booking
    let booking = BookingCreate {
        package_id: "celebration".into(),
        details: BookingDetails {
            customer_name: "Ana Reyes".into(),
            email: Some("ana.reyes@example.ph".into()),
            phone: "09181234567".into(),
            number_of_guests: 28,
            venue: "Barangay Hall, Marikina".into(),
            event_date: "2026-12-05".into(),
            event_time: "17:00".into(),
            payment_method: PaymentMethod::Dp,
            notes: Some("Birthday party".into()),
            customizations: None,
        },
        payment_slip: Some(PaymentProof::new("bpi-deposit.pdf", "application/pdf", b"%PDF-1.7".to_vec())),
    };
    let span = tracing::info_span!("catering_booking");
    match system.booking_client.submit_booking(booking).instrument(span).await {
        Ok(id) => {
            let notice = Notice::booking_submitted();
            info!(booking = %id, title = %notice.title, "{}", notice.description);
        }
        Err(e) => error!(error = %e, notice = ?e.notice(), "Booking failed"),
    }

    info!(
        uploads = storage.objects().len(),
        orders = records.rows(&config.tables.food_orders).len(),
        bookings = records.rows(&config.tables.catering_bookings).len(),
        "Backend state"
    );

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
