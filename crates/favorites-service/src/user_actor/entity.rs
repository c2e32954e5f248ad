//! [`ActorEntity`] implementation for [`User`].

use super::actions::UserAction;
use super::error::UserError;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = User;
    type Context = ();
    type Error = UserError;

    fn preset_id(params: &UserCreate) -> Option<UserId> {
        params.id.clone()
    }

    /// New users start without favorites; `created_at` is stamped here and never changes.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            age: params.age,
            created_at: Utc::now(),
            favorite_ids: Vec::new(),
        })
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<User, Self::Error> {
        match action {
            UserAction::AddFavorite(product_id) => {
                if !self.favorite_ids.contains(&product_id) {
                    self.favorite_ids.push(product_id);
                }
            }
            UserAction::RemoveFavorite(product_id) => {
                self.favorite_ids.retain(|id| id != &product_id);
            }
        }
        Ok(self.clone())
    }
}
