//! # User Actor
//!
//! The user store: one actor owning every [`User`] record, in insertion order.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`User`]
//! - [`actions`] - [`UserAction`] for favorite edits
//! - [`error`] - [`UserError`]
//! - [`new()`] - creates the actor and its [`UserClient`]
//!
//! ## Usage
//!
//! ```rust
//! use favorites_service::user_actor;
//! use favorites_service::model::UserCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create_user(UserCreate::new("Alice", "alice@example.com", 30)).await?;
//!     let user = client.add_favorite(id, "1".into()).await?;
//!     assert_eq!(user.favorite_ids.len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! The store has no dependencies, so its context is `()`.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use actor_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
