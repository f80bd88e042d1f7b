/// A catering reservation for an event.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
use crate::model::order::non_blank;
use crate::model::{deposit_amount, CateringPackage, OrderStatus, PaymentMethod, PaymentProof};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for catering bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub u32);

impl From<u32> for BookingId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "booking_{}", self.0)
    }
}

/// Customer-entered fields of the catering form.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub customer_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub number_of_guests: u32,
    pub venue: String,
    /// `YYYY-MM-DD`
    pub event_date: String,
    /// `HH:MM`, 24-hour
    pub event_time: String,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
    pub customizations: Option<String>,
}

/// What the customer owes for a package under a payment method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentBreakdown {
    pub total_amount: f64,
    /// Only set for reservation deposits.
    pub deposit_amount: Option<f64>,
    pub amount_due: f64,
    pub remaining_balance: f64,
}

impl PaymentBreakdown {
    pub fn compute(package_price: f64, method: PaymentMethod, deposit_rate: f64) -> Self {
        let deposit = (method == PaymentMethod::Dp).then(|| deposit_amount(package_price, deposit_rate));
        let amount_due = deposit.unwrap_or(package_price);
        Self {
            total_amount: package_price,
            deposit_amount: deposit,
            amount_due,
            remaining_balance: package_price - amount_due,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CateringBooking {
    pub id: BookingId,
    pub details: BookingDetails,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub package_id: String,
    /// Resolved against the package catalog during creation.
    pub package: Option<CateringPackage>,
    /// Held only until it has been uploaded.
    pub payment_slip: Option<PaymentProof>,
    pub payment_slip_url: Option<String>,
    pub payment: Option<PaymentBreakdown>,
    pub status: OrderStatus,
    /// The row as returned by the record store.
    pub stored: Option<serde_json::Value>,
}

impl CateringBooking {
    /// The `catering_bookings` row, once the package and payment are known.
    pub fn record(&self) -> Option<CateringBookingRecord> {
        let package = self.package.as_ref()?;
        let payment = self.payment?;
        Some(CateringBookingRecord {
            customer_name: self.details.customer_name.trim().to_string(),
            email: non_blank(&self.details.email),
            phone: self.details.phone.trim().to_string(),
            number_of_guests: self.details.number_of_guests,
            package_id: package.id.clone(),
            package_name: package.name.clone(),
            package_price: package.price,
            venue: self.details.venue.trim().to_string(),
            event_date: self.event_date.format("%Y-%m-%d").to_string(),
            event_time: self.event_time.format("%H:%M").to_string(),
            payment_method: self.details.payment_method,
            payment_slip_url: self.payment_slip_url.clone(),
            deposit_amount: payment.deposit_amount,
            total_amount: payment.total_amount,
            status: self.status,
            notes: non_blank(&self.details.notes),
            customizations: non_blank(&self.details.customizations),
        })
    }
}

/// Payload for submitting a catering booking.
#[derive(Debug, Clone)]
pub struct BookingCreate {
    pub package_id: String,
    pub details: BookingDetails,
    pub payment_slip: Option<PaymentProof>,
}

/// Serialized shape of a `catering_bookings` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CateringBookingRecord {
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub number_of_guests: u32,
    pub package_id: String,
    pub package_name: String,
    pub package_price: f64,
    pub venue: String,
    pub event_date: String,
    pub event_time: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_slip_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_amount: Option<f64>,
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customizations: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_breakdown() {
        let dp = PaymentBreakdown::compute(5800.0, PaymentMethod::Dp, 0.3);
        assert_eq!(dp.deposit_amount, Some(1740.0));
        assert_eq!(dp.amount_due, 1740.0);
        assert_eq!(dp.remaining_balance, 4060.0);

        let full = PaymentBreakdown::compute(2500.0, PaymentMethod::Gcash, 0.3);
        assert_eq!(full.deposit_amount, None);
        assert_eq!(full.amount_due, 2500.0);
        assert_eq!(full.remaining_balance, 0.0);
    }
}
