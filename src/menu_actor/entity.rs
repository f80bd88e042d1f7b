//! [`ActorEntity`] implementation for [`MenuItem`].

use crate::framework::ActorEntity;
use crate::menu_actor::{MenuAction, MenuActionResult, MenuError};
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate, MenuQuote};
use async_trait::async_trait;

fn check_price(price: f64) -> Result<(), MenuError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(MenuError::InvalidItem(format!("price must be non-negative, got {price}")))
    }
}

impl MenuItem {
    /// Name and unit price for a cart line.
    ///
    /// Sized items use the requested size, or the first size when none is given, and are
    /// named `"{name} ({size})"`.
    pub fn quote(&self, size: Option<&str>) -> Result<MenuQuote, MenuError> {
        if !self.available {
            return Err(MenuError::Unavailable(self.name.clone()));
        }

        let Some(first) = self.sizes.first() else {
            return Ok(MenuQuote {
                item_key: self.id.to_string(),
                name: self.name.clone(),
                unit_price: self.price,
                size: None,
            });
        };

        let option = match size {
            Some(wanted) => self.size(wanted).ok_or_else(|| MenuError::UnknownSize {
                item: self.name.clone(),
                size: wanted.to_string(),
            })?,
            None => first,
        };

        Ok(MenuQuote {
            item_key: format!("{}:{}", self.id, option.size),
            name: format!("{} ({})", self.name, option.size),
            unit_price: option.price,
            size: Some(option.size.clone()),
        })
    }
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = MenuActionResult;
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, MenuError> {
        if params.name.trim().is_empty() {
            return Err(MenuError::InvalidItem("name must not be empty".into()));
        }
        check_price(params.price)?;
        for option in &params.sizes {
            check_price(option.price)?;
        }

        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            description: params.description,
            price: params.price,
            sizes: params.sizes,
            available: params.available,
            popular: params.popular,
        })
    }

    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        if let Some(price) = update.price {
            check_price(price)?;
            self.price = price;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        if let Some(popular) = update.popular {
            self.popular = popular;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MenuAction,
        _ctx: &(),
    ) -> Result<MenuActionResult, MenuError> {
        match action {
            MenuAction::Quote(size) => self.quote(size.as_deref()).map(MenuActionResult::Quote),
        }
    }
}
