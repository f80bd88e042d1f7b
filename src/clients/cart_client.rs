//! # Cart Client
//!
//! Provides a high‑level API for interacting with the `CartSession` actor.
//! Every ordering surface holds a clone of this client plus a [`CartId`].
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{CartCreate, CartId, CartSession, CartSummary, LineItem, MenuItemId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartSession>,
}

#[async_trait]
impl ActorClient<CartSession> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            other => other
                .downcast_entity::<CartError>()
                .unwrap_or_else(|e| CartError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartSession>) -> Self {
        Self { inner }
    }

    async fn act(&self, id: CartId, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    /// Opens a new session; pass [`CartCreate::prefilled`] to restore earlier lines.
    #[instrument(skip(self))]
    pub async fn open_cart(&self, params: CartCreate) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Adds one unit and returns the new quantity.
    #[instrument(skip(self, name))]
    pub async fn add_item(
        &self,
        id: CartId,
        item_id: impl Into<String> + std::fmt::Debug + Send,
        name: impl Into<String> + Send,
        unit_price: f64,
    ) -> Result<u32, CartError> {
        debug!("Sending request");
        let action = CartAction::Add {
            item_id: item_id.into(),
            name: name.into(),
            unit_price,
        };
        match self.act(id, action).await? {
            CartActionResult::Add(quantity) => Ok(quantity),
            _ => unreachable!("Add action must return Add result"),
        }
    }

    /// Adds one unit of a menu item at its current menu price.
    ///
    /// Returns the cart key the item is stored under and its new quantity.
    #[instrument(skip(self))]
    pub async fn add_menu_item(
        &self,
        id: CartId,
        item: MenuItemId,
        size: Option<String>,
    ) -> Result<(String, u32), CartError> {
        debug!("Sending request");
        match self.act(id, CartAction::AddFromMenu { item, size }).await? {
            CartActionResult::AddFromMenu { item_key, quantity } => Ok((item_key, quantity)),
            _ => unreachable!("AddFromMenu action must return AddFromMenu result"),
        }
    }

    /// Removes one unit and returns the remaining quantity.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: CartId, item_id: &str) -> Result<u32, CartError> {
        debug!("Sending request");
        match self.act(id, CartAction::Remove(item_id.to_string())).await? {
            CartActionResult::Remove(quantity) => Ok(quantity),
            _ => unreachable!("Remove action must return Remove result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, id: CartId) -> Result<(), CartError> {
        debug!("Sending request");
        match self.act(id, CartAction::Clear).await? {
            CartActionResult::Clear => Ok(()),
            _ => unreachable!("Clear action must return Clear result"),
        }
    }

    /// Takes an order's lines out of the cart and returns what is left.
    #[instrument(skip(self, ordered), fields(lines = ordered.len()))]
    pub async fn checkout(&self, id: CartId, ordered: Vec<LineItem>) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        match self.act(id, CartAction::Checkout(ordered)).await? {
            CartActionResult::Checkout(remaining) => Ok(remaining),
            _ => unreachable!("Checkout action must return Checkout result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn summary(&self, id: CartId) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        match self.act(id, CartAction::Summary).await? {
            CartActionResult::Summary(summary) => Ok(summary),
            _ => unreachable!("Summary action must return Summary result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn order_message(&self, id: CartId) -> Result<String, CartError> {
        debug!("Sending request");
        match self.act(id, CartAction::OrderMessage).await? {
            CartActionResult::OrderMessage(message) => Ok(message),
            _ => unreachable!("OrderMessage action must return OrderMessage result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};
    use crate::menu_actor::MenuError;

    #[tokio::test]
    async fn test_add_item_sends_details() {
        let (client, mut receiver) = create_mock_client::<CartSession>(10);
        let carts = CartClient::new(client);

        let add_task =
            tokio::spawn(async move { carts.add_item(CartId(1), "a", "Lechon", 1600.0).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CartId(1));
        match action {
            CartAction::Add {
                item_id,
                name,
                unit_price,
            } => {
                assert_eq!(item_id, "a");
                assert_eq!(name, "Lechon");
                assert_eq!(unit_price, 1600.0);
            }
            _ => panic!("Expected Add action"),
        }
        responder.send(Ok(CartActionResult::Add(2))).unwrap();

        assert_eq!(add_task.await.unwrap(), Ok(2));
    }

    #[tokio::test]
    async fn test_menu_errors_surface_as_cart_menu_errors() {
        let mut mock = MockClient::<CartSession>::new();
        mock.expect_action(CartId(4))
            .return_err(FrameworkError::EntityError(Box::new(CartError::Menu(
                MenuError::Unavailable("Lechon Belly".into()),
            ))));
        mock.expect_action(CartId(5))
            .return_err(FrameworkError::NotFound("cart_5".into()));

        let carts = CartClient::new(mock.client());
        assert_eq!(
            carts.add_menu_item(CartId(4), MenuItemId(1), None).await,
            Err(CartError::Menu(MenuError::Unavailable("Lechon Belly".into())))
        );
        assert_eq!(
            carts.summary(CartId(5)).await,
            Err(CartError::NotFound("cart_5".into()))
        );
        mock.verify();
    }
}
