//! # User Service
//!
//! The core of the backend: user operations backed by the user store, with every returned
//! user enriched through the [`FavoritesAggregator`].
//!
//! Store errors fail the request. Aggregation errors never do; they only shrink the
//! favorites list.

use crate::clients::UserClient;
use crate::favorites::FavoritesAggregator;
use crate::model::{ProductId, User, UserCreate, UserId, UserResponse, UsersPage};
use crate::user_actor::UserError;
use futures::future::join_all;
use tracing::{info, instrument};

/// User operations over the store and the product catalog.
#[derive(Clone)]
pub struct UserService {
    users: UserClient,
    favorites: FavoritesAggregator,
}

impl UserService {
    pub fn new(users: UserClient, favorites: FavoritesAggregator) -> Self {
        Self { users, favorites }
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<UserResponse, UserError> {
        let user = self.users.get_user(id).await?;
        Ok(self.enrich(user).await)
    }

    /// One page of users in insertion order. Each user's favorites are resolved on their
    /// own, and all users of the page are resolved concurrently.
    #[instrument(skip(self))]
    pub async fn list_users(&self, offset: usize, limit: usize) -> Result<UsersPage, UserError> {
        let page = self.users.list_users(offset, limit).await?;
        let users = join_all(page.items.into_iter().map(|user| self.enrich(user))).await;
        Ok(UsersPage {
            users,
            total: page.total,
        })
    }

    /// New users have no favorites, so the catalog is not consulted.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserResponse, UserError> {
        let id = self.users.create_user(params).await?;
        let user = self.users.get_user(id).await?;
        info!(id = %user.id, "user created");
        Ok(UserResponse::new(user, Vec::new()))
    }

    #[instrument(skip(self))]
    pub async fn add_favorite(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<UserResponse, UserError> {
        let user = self.users.add_favorite(user_id, product_id).await?;
        Ok(self.enrich(user).await)
    }

    #[instrument(skip(self))]
    pub async fn remove_favorite(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<UserResponse, UserError> {
        let user = self.users.remove_favorite(user_id, product_id).await?;
        Ok(self.enrich(user).await)
    }

    async fn enrich(&self, user: User) -> UserResponse {
        let favorites = self.favorites.resolve(&user.favorite_ids).await;
        UserResponse::new(user, favorites)
    }
}
