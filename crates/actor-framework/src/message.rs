//! # Generic Messages
//!
//! The request envelope a `ResourceClient` sends to its `ResourceActor`. Every variant
//! carries its own `oneshot` reply channel, so one request gets exactly one answer.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::page::Page;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a resource actor.
///
/// Create, Get, List, Update and Delete cover the lifecycle shared by every resource;
/// `Action` carries the record-specific operations declared by [`ActorEntity::Action`].
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
    List {
        offset: usize,
        limit: usize,
        respond_to: Response<Page<T>>,
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
