//! [`ActorEntity`] implementation for [`CartSession`].

use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::MenuClient;
use crate::framework::ActorEntity;
use crate::model::{Cart, CartCreate, CartId, CartSession};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for CartSession {
    type Id = CartId;
    type Create = CartCreate;
    type Update = (); // Carts change through actions only
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = MenuClient;
    type Error = CartError;

    /// Opens a session with any restored lines.
    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, CartError> {
        let mut cart = Cart::new();
        for line in params.lines {
            cart.restore(line);
        }
        Ok(Self { id, cart })
    }

    async fn on_update(&mut self, _update: (), _ctx: &MenuClient) -> Result<(), CartError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        menu: &MenuClient,
    ) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::Add {
                item_id,
                name,
                unit_price,
            } => Ok(CartActionResult::Add(self.cart.add(item_id, name, unit_price))),
            CartAction::AddFromMenu { item, size } => {
                let quote = menu.quote(item, size).await?;
                debug!(cart = %self.id, item = %quote.item_key, price = quote.unit_price, "Quoted");
                let quantity = self
                    .cart
                    .add(quote.item_key.clone(), quote.name, quote.unit_price);
                Ok(CartActionResult::AddFromMenu {
                    item_key: quote.item_key,
                    quantity,
                })
            }
            CartAction::Remove(item_id) => Ok(CartActionResult::Remove(self.cart.remove(&item_id))),
            CartAction::Clear => {
                self.cart.clear();
                Ok(CartActionResult::Clear)
            }
            CartAction::Checkout(ordered) => {
                self.cart.checkout(&ordered);
                debug!(cart = %self.id, remaining = self.cart.total_item_count(), "Checked out");
                Ok(CartActionResult::Checkout(self.cart.summary()))
            }
            CartAction::Summary => Ok(CartActionResult::Summary(self.cart.summary())),
            CartAction::OrderMessage => Ok(CartActionResult::OrderMessage(self.cart.order_message())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineItem;

    #[test]
    fn test_prefilled_cart_restores_quantities() {
        let session = CartSession::from_create_params(
            CartId(1),
            CartCreate::prefilled(vec![
                LineItem {
                    item_id: "menu_1".into(),
                    name: "Lechon Belly".into(),
                    unit_price: 1600.0,
                    quantity: 2,
                },
                LineItem {
                    item_id: "menu_9".into(),
                    name: "Puto".into(),
                    unit_price: 50.0,
                    quantity: 0,
                },
            ]),
        )
        .unwrap();

        assert_eq!(session.cart.quantity_of("menu_1"), 2);
        assert_eq!(session.cart.quantity_of("menu_9"), 0);
        assert_eq!(session.cart.line_items().len(), 1);
        assert_eq!(session.cart.total_price(), 3200.0);
    }

    #[test]
    fn test_large_restored_quantity() {
        let session = CartSession::from_create_params(
            CartId(1),
            CartCreate::prefilled(vec![LineItem {
                item_id: "menu_1".into(),
                name: "Lechon Belly".into(),
                unit_price: 1600.0,
                quantity: 20_000_000,
            }]),
        )
        .unwrap();

        assert_eq!(session.cart.total_item_count(), 20_000_000);
    }
}
