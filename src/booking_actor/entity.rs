//! [`ActorEntity`] implementation for [`CateringBooking`].

use crate::booking_actor::{BookingContext, BookingError, MISSING_SLIP, NO_PACKAGE};
use crate::framework::ActorEntity;
use crate::model::{
    validate, BookingCreate, BookingId, CateringBooking, OrderStatus, OrderUpdate, PaymentBreakdown,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

fn invalid(message: String) -> BookingError {
    BookingError::ValidationError(message)
}

/// Upload destination for a catering payment slip.
pub fn slip_path(file_name: &str) -> String {
    format!(
        "payment-slips/catering/{}-{}",
        Utc::now().timestamp_millis(),
        file_name
    )
}

#[async_trait]
impl ActorEntity for CateringBooking {
    type Id = BookingId;
    type Create = BookingCreate;
    type Update = OrderUpdate;
    type Action = (); // No custom actions for now
    type ActionResult = ();
    type Context = BookingContext;
    type Error = BookingError;

    fn from_create_params(id: BookingId, params: BookingCreate) -> Result<Self, BookingError> {
        let details = &params.details;
        validate::min_chars(&details.customer_name, 2, "Name must be at least 2 characters")
            .map_err(invalid)?;
        if let Some(email) = details.email.as_deref().filter(|e| !e.trim().is_empty()) {
            validate::email(email).map_err(invalid)?;
        }
        validate::min_chars(&details.phone, 10, "Please enter a valid phone number")
            .map_err(invalid)?;
        if details.number_of_guests < 1 {
            return Err(invalid("Number of guests must be at least 1".into()));
        }
        if params.package_id.trim().is_empty() {
            return Err(invalid(NO_PACKAGE.into()));
        }
        validate::min_chars(&details.venue, 5, "Please enter the venue details").map_err(invalid)?;
        let event_date = validate::event_date(&details.event_date).map_err(invalid)?;
        let event_time = validate::event_time(&details.event_time).map_err(invalid)?;
        if !details.payment_method.allowed_for_catering() {
            return Err(invalid(format!(
                "Payment method '{}' is not accepted for catering bookings",
                details.payment_method
            )));
        }

        Ok(Self {
            id,
            details: params.details,
            event_date,
            event_time,
            package_id: params.package_id.trim().to_string(),
            package: None,
            payment_slip: params.payment_slip,
            payment_slip_url: None,
            payment: None,
            status: OrderStatus::Pending,
            stored: None,
        })
    }

    async fn on_create(&mut self, ctx: &BookingContext) -> Result<(), BookingError> {
        let package = ctx
            .catalog
            .find(&self.package_id)
            .cloned()
            .ok_or_else(|| invalid(NO_PACKAGE.into()))?;
        let slip = self
            .payment_slip
            .take()
            .ok_or_else(|| invalid(MISSING_SLIP.into()))?;

        let path = slip_path(&slip.file_name);
        let url = ctx.backend.storage.upload(&ctx.bucket, &path, &slip).await?;
        info!(booking = %self.id, %url, "Payment slip uploaded");
        self.payment_slip_url = Some(url);

        self.payment = Some(PaymentBreakdown::compute(
            package.price,
            self.details.payment_method,
            ctx.deposit_rate,
        ));
        self.package = Some(package);

        let record = self
            .record()
            .ok_or_else(|| BookingError::Serialization("package or payment missing".into()))?;
        let row = serde_json::to_value(record)
            .map_err(|e| BookingError::Serialization(e.to_string()))?;
        let stored = ctx.backend.records.insert(&ctx.table, row).await?;
        info!(booking = %self.id, table = %ctx.table, "Booking stored");
        self.stored = Some(stored);
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &BookingContext) -> Result<(), BookingError> {
        if !self.status.can_become(update.status) {
            return Err(BookingError::InvalidStatus {
                from: self.status,
                to: update.status,
            });
        }
        self.status = update.status;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &BookingContext) -> Result<(), BookingError> {
        Ok(())
    }
}
