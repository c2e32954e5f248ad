//! # ActorEntity Trait
//!
//! The contract a record type fulfils to be owned by a [`ResourceActor`](crate::ResourceActor).
//! It names the id, the create/update payloads, the custom actions the record understands,
//! the dependencies injected at run time, and the error the record's own logic can raise.
//!
//! # Lifecycle Hooks
//! `on_create` and `on_delete` have no-op defaults. `on_update` and `handle_action`
//! must be written by every entity, even if they only return `Ok`.
//!
//! # Ids
//! Ids are generated by the actor from a `u32` counter (hence `From<u32>`). An entity may
//! instead ask for a specific id through [`ActorEntity::preset_id`], which is how seed data
//! keeps stable, well-known ids.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource record must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they may call other actors. The `Context` associated type is handed
/// to every hook; it is supplied to `ResourceActor::run`, after all clients exist.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. Must be buildable from the actor's `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used to create a new record.
    type Create: Send + Sync + Debug;

    /// Payload used to update an existing record.
    type Update: Send + Sync + Debug;

    /// Record-specific operations that don't fit CRUD (e.g. `AddFavorite`).
    type Action: Send + Sync + Debug;

    /// What an action hands back to the caller.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected at run time. `()` when there are none.
    type Context: Send + Sync;

    /// Error raised by this record's own logic.
    ///
    /// One error enum per actor, shared by every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Explicit id requested by a create payload, if any.
    ///
    /// Returning `None` (the default) lets the actor pick the next free generated id.
    fn preset_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Build the record from its id and create payload. Runs before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after the record is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update payload in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Run a record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
