use super::{Product, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored user. Generated ids are the decimal counter value (`"1"`, `"2"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl From<u32> for UserId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored user record.
///
/// `favorite_ids` keeps the order favorites were added in and never holds the same id twice.
/// The ids are not checked against the product catalog.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](actor_framework::ResourceActor); see
/// [`crate::user_actor`] for the entity implementation and the favorite actions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub created_at: DateTime<Utc>,
    pub favorite_ids: Vec<ProductId>,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    /// Explicit id, used when seeding. `None` lets the store pick one.
    #[serde(skip)]
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub age: u32,
}

impl UserCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    pub fn with_id(mut self, id: impl Into<UserId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Payload for updating an existing user's profile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}

/// A user as handed to callers: favorites are resolved products, never raw ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub created_at: DateTime<Utc>,
    pub favorites: Vec<Product>,
}

impl UserResponse {
    pub fn new(user: User, favorites: Vec<Product>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            created_at: user.created_at,
            favorites,
        }
    }
}

/// One page of users. `total` counts every stored user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsersPage {
    pub users: Vec<UserResponse>,
    pub total: usize,
}
