//! # User Client
//!
//! High-level API over the user store actor.
use crate::model::{ProductId, User, UserCreate, UserId};
use crate::user_actor::{UserAction, UserError};
use actor_framework::{ActorClient, FrameworkError, Page, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::AlreadyExists(id) => UserError::AlreadyExists(id),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Like [`ActorClient::get`], but a missing user is an error.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    pub async fn list_users(&self, offset: usize, limit: usize) -> Result<Page<User>, UserError> {
        self.list(offset, limit).await
    }

    #[instrument(skip(self))]
    pub async fn add_favorite(&self, id: UserId, product_id: ProductId) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, UserAction::AddFavorite(product_id))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn remove_favorite(
        &self,
        id: UserId,
        product_id: ProductId,
    ) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, UserAction::RemoveFavorite(product_id))
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, expect_create, MockClient};
    use chrono::Utc;

    fn user(id: &str, favorites: &[&str]) -> User {
        User {
            id: id.into(),
            name: "Alice".into(),
            email: "alice@example.com".into(),
            age: 30,
            created_at: Utc::now(),
            favorite_ids: favorites.iter().map(|&f| f.into()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_user_sends_payload() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let user_client = UserClient::new(client);

        let task = tokio::spawn(async move {
            user_client
                .create_user(UserCreate::new("Alice", "alice@example.com", 30))
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Alice");
        assert_eq!(params.age, 30);
        assert!(params.id.is_none());
        responder.send(Ok(UserId::from(1))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), UserId::from("1"));
    }

    #[tokio::test]
    async fn test_add_favorite_sends_action() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let user_client = UserClient::new(client);

        let task =
            tokio::spawn(async move { user_client.add_favorite("1".into(), "2".into()).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, UserId::from("1"));
        assert_eq!(action, UserAction::AddFavorite("2".into()));
        responder.send(Ok(user("1", &["2"]))).unwrap();

        let updated = task.await.unwrap().unwrap();
        assert_eq!(updated.favorite_ids, vec![ProductId::from("2")]);
    }

    #[tokio::test]
    async fn test_missing_user_maps_to_not_found() {
        let mut mock = MockClient::<User>::new();
        mock.expect_get("7".into()).return_ok(None);
        mock.expect_action("8".into())
            .return_err(FrameworkError::NotFound("8".into()));
        let user_client = UserClient::new(mock.client());

        let err = user_client.get_user("7".into()).await.unwrap_err();
        assert_eq!(err, UserError::NotFound("7".into()));

        let err = user_client
            .remove_favorite("8".into(), "1".into())
            .await
            .unwrap_err();
        assert_eq!(err, UserError::NotFound("8".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_store_is_a_communication_error() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        let user_client = UserClient::new(mock.client());

        let err = user_client.list_users(0, 10).await.unwrap_err();
        assert!(matches!(err, UserError::ActorCommunicationError(_)));
    }
}
