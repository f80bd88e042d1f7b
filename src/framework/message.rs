//! # Generic Messages
//!
//! Request envelopes exchanged between `ResourceClient` and `ResourceActor`.

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to CRUD plus a custom `Action`:
///
/// - **Create**: uses [`ActorEntity::Create`] to initialize a new resource (opening a cart,
///   submitting an order).
/// - **Get**: fetches the current state by ID.
/// - **Update**: applies [`ActorEntity::Update`] (menu price change, order status).
/// - **Delete**: removes the resource (closing a cart).
/// - **Action**: executes a custom [`ActorEntity::Action`] (adding a cart line, quoting a menu item).
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
