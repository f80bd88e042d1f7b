use async_trait::async_trait;
use catering_hub::backend::{
    Backend, FileStorage, InMemoryFileStorage, InMemoryRecordStore, UploadError,
};
use catering_hub::booking_actor::{BookingError, NO_PACKAGE};
use catering_hub::cart_actor::CartError;
use catering_hub::clients::ActorClient;
use catering_hub::config::AppConfig;
use catering_hub::lifecycle::CateringSystem;
use catering_hub::menu_actor::MenuError;
use catering_hub::model::{
    BookingCreate, BookingDetails, CartCreate, DeliveryDetails, FoodOrderCreate, MenuItemCreate,
    MenuItemId, MenuItemUpdate, OrderStatus, PaymentMethod, PaymentProof, SizeOption,
};
use catering_hub::order_actor::OrderError;
use std::sync::Arc;
use std::time::Duration;

struct Fixture {
    system: CateringSystem,
    storage: Arc<InMemoryFileStorage>,
    records: Arc<InMemoryRecordStore>,
    lechon: MenuItemId,
    spaghetti: MenuItemId,
}

async fn start() -> Fixture {
    let config = AppConfig::default();
    let (backend, storage, records) = Backend::in_memory(&config.storage.public_base_url);
    let system = CateringSystem::new(&config, backend);

    let lechon = system
        .menu_client
        .create_item(MenuItemCreate::new("Lechon Belly", "pork", 1600.0).popular())
        .await
        .expect("Failed to create menu item");
    let spaghetti = system
        .menu_client
        .create_item(MenuItemCreate::new("Cheesy Spaghetti", "pasta", 0.0).with_sizes(vec![
            SizeOption::new("Small", 650.0),
            SizeOption::new("Large", 1200.0),
        ]))
        .await
        .expect("Failed to create menu item");

    Fixture {
        system,
        storage,
        records,
        lechon,
        spaghetti,
    }
}

fn delivery(cart_id: catering_hub::model::CartId, method: PaymentMethod) -> FoodOrderCreate {
    FoodOrderCreate {
        cart_id,
        details: DeliveryDetails {
            customer_name: "Maria Santos".into(),
            phone: "09171234567".into(),
            delivery_address: "12 Mabini St, Marikina".into(),
            preferred_delivery_time: None,
            payment_method: method,
            notes: Some("Gate code 1234".into()),
        },
        receipt: method
            .requires_proof()
            .then(|| PaymentProof::new("receipt.jpg", "image/jpeg", vec![0xff, 0xd8])),
    }
}

fn booking(package_id: &str, method: PaymentMethod) -> BookingCreate {
    BookingCreate {
        package_id: package_id.into(),
        details: BookingDetails {
            customer_name: "Ana Reyes".into(),
            email: Some("ana.reyes@example.ph".into()),
            phone: "09181234567".into(),
            number_of_guests: 28,
            venue: "Barangay Hall, Marikina".into(),
            event_date: "2026-12-05".into(),
            event_time: "17:00".into(),
            payment_method: method,
            notes: None,
            customizations: Some("No peanuts".into()),
        },
        payment_slip: Some(PaymentProof::new("slip.pdf", "application/pdf", b"%PDF".to_vec())),
    }
}

/// Full end-to-end flow: menu → cart → delivery order with every actor real.
#[tokio::test]
async fn test_full_delivery_order_flow() {
    let f = start().await;
    let carts = &f.system.cart_client;

    let cart = carts.open_cart(CartCreate::empty()).await.unwrap();
    carts.add_menu_item(cart, f.lechon, None).await.unwrap();
    let (key, quantity) = carts.add_menu_item(cart, f.lechon, None).await.unwrap();
    assert_eq!(key, "menu_1");
    assert_eq!(quantity, 2);
    let (sized_key, _) = carts
        .add_menu_item(cart, f.spaghetti, Some("Large".into()))
        .await
        .unwrap();
    assert_eq!(sized_key, "menu_2:Large");

    let summary = carts.summary(cart).await.unwrap();
    assert_eq!(summary.total_items, 3);
    assert_eq!(summary.total_price, 4400.0);
    assert_eq!(summary.lines[1].name, "Cheesy Spaghetti (Large)");

    let order_id = f
        .system
        .order_client
        .submit_order(delivery(cart, PaymentMethod::Gcash))
        .await
        .expect("Failed to submit order");

    let rows = f.records.rows("food_orders");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["total_amount"], 4400.0);
    assert_eq!(rows[0]["order_items"].as_array().map(Vec::len), Some(2));
    assert_eq!(f.storage.objects().len(), 1);

    // Success takes the ordered lines out of the session cart
    let after = carts.summary(cart).await.unwrap();
    assert_eq!(after.total_items, 0);
    assert_eq!(after.total_price, 0.0);

    let order = f
        .system
        .order_client
        .get(order_id)
        .await
        .unwrap()
        .expect("Order not found");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_amount, 4400.0);

    f.system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_failed_upload_leaves_cart_for_retry() {
    let f = start().await;
    let carts = &f.system.cart_client;
    let cart = carts.open_cart(CartCreate::empty()).await.unwrap();
    carts.add_menu_item(cart, f.lechon, None).await.unwrap();

    f.storage.fail_with(UploadError::Unavailable("503".into()));
    let err = f
        .system
        .order_client
        .submit_order(delivery(cart, PaymentMethod::Bpi))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Upload(_)));
    assert_eq!(carts.summary(cart).await.unwrap().total_items, 1);
    assert!(f.records.rows("food_orders").is_empty());

    f.storage.recover();
    f.system
        .order_client
        .submit_order(delivery(cart, PaymentMethod::Bpi))
        .await
        .expect("Retry failed");
    assert_eq!(carts.summary(cart).await.unwrap().total_items, 0);
    assert_eq!(f.records.rows("food_orders").len(), 1);

    f.system.shutdown().await.unwrap();
}

/// Storage that takes its time, leaving room for other surfaces to touch the cart.
struct SlowStorage {
    inner: Arc<InMemoryFileStorage>,
    delay: Duration,
}

#[async_trait]
impl FileStorage for SlowStorage {
    async fn upload(&self, bucket: &str, path: &str, file: &PaymentProof) -> Result<String, UploadError> {
        tokio::time::sleep(self.delay).await;
        self.inner.upload(bucket, path, file).await
    }
}

#[tokio::test]
async fn test_items_added_during_submission_stay_in_cart() {
    let config = AppConfig::default();
    let storage = Arc::new(InMemoryFileStorage::new(&config.storage.public_base_url));
    let records = Arc::new(InMemoryRecordStore::new());
    let slow = SlowStorage {
        inner: storage.clone(),
        delay: Duration::from_millis(200),
    };
    let system = CateringSystem::new(&config, Backend::new(Arc::new(slow), records.clone()));

    let carts = system.cart_client.clone();
    let cart = carts.open_cart(CartCreate::empty()).await.unwrap();
    carts.add_item(cart, "a", "Puto", 100.0).await.unwrap();

    let orders = system.order_client.clone();
    let submission =
        tokio::spawn(async move { orders.submit_order(delivery(cart, PaymentMethod::Gcash)).await });

    // Another surface keeps shopping while the receipt uploads
    tokio::time::sleep(Duration::from_millis(50)).await;
    carts.add_item(cart, "b", "Kutsinta", 50.0).await.unwrap();
    assert_eq!(carts.add_item(cart, "a", "Puto", 100.0).await.unwrap(), 2);

    submission.await.unwrap().expect("Failed to submit order");

    let rows = records.rows("food_orders");
    assert_eq!(rows.len(), 1);
    let items = rows[0]["order_items"].as_array().expect("order_items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["item_id"], "a");
    assert_eq!(items[0]["quantity"], 1);
    assert_eq!(rows[0]["total_amount"], 100.0);
    assert_eq!(storage.objects().len(), 1);

    let left = carts.summary(cart).await.unwrap();
    assert_eq!(left.total_items, 2);
    assert_eq!(left.total_price, 150.0);
    assert_eq!(carts.get(cart).await.unwrap().unwrap().cart.quantity_of("b"), 1);

    drop(carts);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_price_locked_at_add_time() {
    let f = start().await;
    let carts = &f.system.cart_client;
    let cart = carts.open_cart(CartCreate::empty()).await.unwrap();
    carts.add_menu_item(cart, f.lechon, None).await.unwrap();

    f.system
        .menu_client
        .update_item(
            f.lechon,
            MenuItemUpdate {
                price: Some(1800.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(carts.summary(cart).await.unwrap().total_price, 1600.0);

    // Adding again refreshes the cached price for the whole line
    carts.add_menu_item(cart, f.lechon, None).await.unwrap();
    assert_eq!(carts.summary(cart).await.unwrap().total_price, 3600.0);

    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_sessions_are_independent_and_shared_by_id() {
    let f = start().await;
    let carts = f.system.cart_client.clone();
    let first = carts.open_cart(CartCreate::empty()).await.unwrap();
    let second = carts.open_cart(CartCreate::empty()).await.unwrap();

    carts.add_item(first, "a", "Puto", 100.0).await.unwrap();
    carts.add_item(first, "b", "Kutsinta", 50.0).await.unwrap();

    // Another surface holding a clone sees the same cart
    let other_surface = f.system.cart_client.clone();
    let summary = other_surface.summary(first).await.unwrap();
    assert_eq!(summary.total_price, 150.0);
    assert_eq!(summary.lines.len(), 2);
    assert!(other_surface.summary(second).await.unwrap().is_empty());

    assert_eq!(carts.remove_item(first, "a").await.unwrap(), 0);
    assert_eq!(carts.remove_item(first, "missing").await.unwrap(), 0);
    carts.clear(first).await.unwrap();
    assert_eq!(carts.summary(first).await.unwrap().total_items, 0);

    carts.delete(second).await.unwrap();
    assert_eq!(
        carts.summary(second).await,
        Err(CartError::NotFound("cart_2".into()))
    );

    drop(carts);
    drop(other_surface);
    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_menu_refusals_reach_the_cart_caller() {
    let f = start().await;
    let carts = &f.system.cart_client;
    let cart = carts.open_cart(CartCreate::empty()).await.unwrap();

    assert_eq!(
        carts
            .add_menu_item(cart, f.spaghetti, Some("Family".into()))
            .await,
        Err(CartError::Menu(MenuError::UnknownSize {
            item: "Cheesy Spaghetti".into(),
            size: "Family".into()
        }))
    );

    f.system
        .menu_client
        .update_item(
            f.lechon,
            MenuItemUpdate {
                available: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(
        carts.add_menu_item(cart, f.lechon, None).await,
        Err(CartError::Menu(MenuError::Unavailable("Lechon Belly".into())))
    );
    assert_eq!(
        carts.add_menu_item(cart, MenuItemId(42), None).await,
        Err(CartError::Menu(MenuError::NotFound("menu_42".into())))
    );
    assert!(carts.summary(cart).await.unwrap().is_empty());

    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_prefilled_cart_and_order_message() {
    let f = start().await;
    let carts = &f.system.cart_client;
    let cart = carts.open_cart(CartCreate::empty()).await.unwrap();
    carts.add_item(cart, "pk001", "Lechon Belly", 1600.0).await.unwrap();
    carts.add_item(cart, "pk001", "Lechon Belly", 1600.0).await.unwrap();

    let message = carts.order_message(cart).await.unwrap();
    assert!(message.contains("• 2x Lechon Belly - ₱3200"));
    assert!(message.contains("Total: ₱3200"));

    let lines = carts.summary(cart).await.unwrap().lines;
    let restored = carts.open_cart(CartCreate::prefilled(lines)).await.unwrap();
    assert_eq!(carts.summary(restored).await.unwrap().total_price, 3200.0);

    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_catering_booking_with_deposit() {
    let f = start().await;

    let id = f
        .system
        .booking_client
        .submit_booking(booking("celebration", PaymentMethod::Dp))
        .await
        .expect("Failed to submit booking");

    let rows = f.records.rows("catering_bookings");
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["package_name"], "Celebration Package");
    assert_eq!(row["package_price"], 5800.0);
    assert_eq!(row["total_amount"], 5800.0);
    assert_eq!(row["deposit_amount"], 1740.0);
    assert_eq!(row["event_date"], "2026-12-05");
    assert_eq!(row["event_time"], "17:00");
    assert_eq!(row["customizations"], "No peanuts");
    assert!(row["payment_slip_url"]
        .as_str()
        .is_some_and(|url| url.contains("/payment-proofs/payment-slips/catering/")));

    let stored = f.system.booking_client.get(id).await.unwrap().unwrap();
    let payment = stored.payment.unwrap();
    assert_eq!(payment.amount_due, 1740.0);
    assert_eq!(payment.remaining_balance, 4060.0);

    // Paths are millisecond-stamped and never overwritten, so use another file name
    let mut full_payment = booking("intimate", PaymentMethod::Gcash);
    full_payment.payment_slip = Some(PaymentProof::new("gcash.png", "image/png", vec![1]));
    f.system
        .booking_client
        .submit_booking(full_payment)
        .await
        .unwrap();
    let rows = f.records.rows("catering_bookings");
    assert_eq!(rows[1]["total_amount"], 2500.0);
    assert!(rows[1].get("deposit_amount").is_none());

    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_booking_rejections_do_not_touch_backend() {
    let f = start().await;

    let err = f
        .system
        .booking_client
        .submit_booking(booking("wedding", PaymentMethod::Bpi))
        .await
        .unwrap_err();
    assert_eq!(err, BookingError::ValidationError(NO_PACKAGE.into()));
    assert_eq!(err.notice().title, "Package not selected");

    let mut no_slip = booking("grand", PaymentMethod::Bpi);
    no_slip.payment_slip = None;
    let err = f
        .system
        .booking_client
        .submit_booking(no_slip)
        .await
        .unwrap_err();
    assert_eq!(err.notice().title, "Payment slip required");

    assert!(f.storage.objects().is_empty());
    assert!(f.records.rows("catering_bookings").is_empty());

    f.system.shutdown().await.unwrap();
}
