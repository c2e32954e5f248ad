use crate::clients::{ProductClient, UserClient};
use crate::config::SystemConfig;
use crate::favorites::FavoritesAggregator;
use crate::model::UserCreate;
use crate::product_actor::{self, default_catalog, ProductError};
use crate::user_actor::{self, UserError};
use crate::user_service::UserService;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Failures while seeding or stopping the system.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("seeding products failed: {0}")]
    SeedProducts(#[from] ProductError),
    #[error("seeding users failed: {0}")]
    SeedUsers(#[from] UserError),
    #[error("actor task failed: {0}")]
    ActorTask(String),
}

/// Runtime owner of the user store, the product catalog and the service built on them.
///
/// ```rust
/// use favorites_service::config::SystemConfig;
/// use favorites_service::lifecycle::ServiceSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = ServiceSystem::new(SystemConfig::default());
///     system.seed().await?;
///
///     let user = system.user_service.get_user("1".into()).await?;
///     assert_eq!(user.favorites.len(), 2);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct ServiceSystem {
    pub user_client: UserClient,

    /// Catalog client, bounded by the configured product call timeout.
    pub product_client: ProductClient,

    pub user_service: UserService,

    handles: Vec<JoinHandle<()>>,
}

impl ServiceSystem {
    /// Spawns both actors and wires the user service. Must be called inside a Tokio runtime.
    pub fn new(config: SystemConfig) -> Self {
        let (user_actor, user_client) = user_actor::new(config.buffer_size);
        let (product_actor, product_client) = product_actor::new(config.buffer_size);
        let product_client = product_client.with_timeout(config.product_call_timeout);

        let user_handle = tokio::spawn(user_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));

        let favorites =
            FavoritesAggregator::new(Arc::new(product_client.clone()), config.favorites_policy);
        let user_service = UserService::new(user_client.clone(), favorites);

        info!(
            buffer_size = config.buffer_size,
            timeout = ?config.product_call_timeout,
            policy = ?config.favorites_policy,
            "Service system started"
        );

        Self {
            user_client,
            product_client,
            user_service,
            handles: vec![user_handle, product_handle],
        }
    }

    /// Load the default catalog and two demo users. User `"1"` favors products `"1"` and `"2"`.
    ///
    /// Ids are fixed, so seeding twice fails with `AlreadyExists`.
    pub async fn seed(&self) -> Result<(), SystemError> {
        for product in default_catalog() {
            self.product_client.create_product(product).await?;
        }

        let john = self
            .user_client
            .create_user(UserCreate::new("John Doe", "john@example.com", 30).with_id("1"))
            .await?;
        self.user_client
            .create_user(UserCreate::new("Jane Doe", "jane@example.com", 25).with_id("2"))
            .await?;
        for product_id in ["1", "2"] {
            self.user_client
                .add_favorite(john.clone(), product_id.into())
                .await?;
        }

        info!("Demo data seeded");
        Ok(())
    }

    /// Drop every client held here, then wait for both actors to exit.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.user_service);
        drop(self.user_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }

        info!("System shutdown complete");
        Ok(())
    }
}
