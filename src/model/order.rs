/// A food delivery order submitted from a cart session.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// Creating one runs the whole submission: see
/// [`order_actor`](crate::order_actor) for the steps.
use crate::model::{CartId, LineItem, PaymentMethod, PaymentProof};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for delivery orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Where an order or booking stands with the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Completed and cancelled are final.
    pub fn can_become(self, next: OrderStatus) -> bool {
        self == next || !matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// Customer-entered fields of the delivery form.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryDetails {
    pub customer_name: String,
    pub phone: String,
    pub delivery_address: String,
    pub preferred_delivery_time: Option<String>,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

/// One row of the `order_items` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub item_id: String,
    pub item_name: String,
    pub quantity: u32,
    pub price: f64,
}

impl From<LineItem> for OrderItem {
    fn from(line: LineItem) -> Self {
        Self {
            item_id: line.item_id,
            item_name: line.name,
            quantity: line.quantity,
            price: line.unit_price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FoodOrder {
    pub id: OrderId,
    pub cart_id: CartId,
    pub details: DeliveryDetails,
    /// Held only until it has been uploaded.
    pub receipt: Option<PaymentProof>,
    pub receipt_url: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    /// The row as returned by the record store.
    pub stored: Option<serde_json::Value>,
}

impl FoodOrder {
    pub fn new(id: OrderId, params: FoodOrderCreate) -> Self {
        Self {
            id,
            cart_id: params.cart_id,
            details: params.details,
            receipt: params.receipt,
            receipt_url: None,
            items: Vec::new(),
            total_amount: 0.0,
            status: OrderStatus::Pending,
            stored: None,
        }
    }

    /// The `food_orders` row for this order.
    pub fn record(&self) -> FoodOrderRecord {
        FoodOrderRecord {
            customer_name: self.details.customer_name.trim().to_string(),
            phone: self.details.phone.trim().to_string(),
            delivery_address: self.details.delivery_address.trim().to_string(),
            order_items: self.items.clone(),
            preferred_delivery_time: non_blank(&self.details.preferred_delivery_time),
            payment_method: self.details.payment_method,
            receipt_url: self.receipt_url.clone(),
            total_amount: self.total_amount,
            status: self.status,
            notes: non_blank(&self.details.notes),
        }
    }
}

/// Empty optional form fields are left out of the row.
pub(crate) fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Payload for submitting a delivery order.
#[derive(Debug, Clone)]
pub struct FoodOrderCreate {
    pub cart_id: CartId,
    pub details: DeliveryDetails,
    pub receipt: Option<PaymentProof>,
}

/// Serialized shape of a `food_orders` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodOrderRecord {
    pub customer_name: String,
    pub phone: String,
    pub delivery_address: String,
    pub order_items: Vec<OrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_delivery_time: Option<String>,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// DTOs for order updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details() -> DeliveryDetails {
        DeliveryDetails {
            customer_name: " Maria Santos ".into(),
            phone: "09171234567".into(),
            delivery_address: "12 Mabini St, Quezon City".into(),
            preferred_delivery_time: Some("   ".into()),
            payment_method: PaymentMethod::Cod,
            notes: Some("Ring twice".into()),
        }
    }

    #[test]
    fn test_final_statuses_stay_final() {
        assert!(OrderStatus::Pending.can_become(OrderStatus::Confirmed));
        assert!(OrderStatus::Confirmed.can_become(OrderStatus::Cancelled));
        assert!(!OrderStatus::Completed.can_become(OrderStatus::Pending));
        assert!(!OrderStatus::Cancelled.can_become(OrderStatus::Confirmed));
        assert!(OrderStatus::Cancelled.can_become(OrderStatus::Cancelled));
    }

    #[test]
    fn test_record_shape() {
        let mut order = FoodOrder::new(
            OrderId(1),
            FoodOrderCreate {
                cart_id: CartId(1),
                details: details(),
                receipt: None,
            },
        );
        order.items = vec![OrderItem {
            item_id: "menu_1".into(),
            item_name: "Lechon Belly".into(),
            quantity: 2,
            price: 1600.0,
        }];
        order.total_amount = 3200.0;

        let row = serde_json::to_value(order.record()).unwrap();
        assert_eq!(
            row,
            json!({
                "customer_name": "Maria Santos",
                "phone": "09171234567",
                "delivery_address": "12 Mabini St, Quezon City",
                "order_items": [
                    {"item_id": "menu_1", "item_name": "Lechon Belly", "quantity": 2, "price": 1600.0}
                ],
                "payment_method": "cod",
                "total_amount": 3200.0,
                "status": "pending",
                "notes": "Ring twice"
            })
        );
    }
}
