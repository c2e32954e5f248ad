//! # Product Client
//!
//! High-level API over the product catalog actor. This is the only way the rest of the
//! service reaches the catalog; the favorites aggregator sees it through
//! [`ProductLookup`](crate::favorites::ProductLookup).
use crate::favorites::ProductLookup;
use crate::model::{Product, ProductCreate, ProductId, ProductsPage};
use crate::product_actor::ProductError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Same client, but every call fails with [`ProductError::Timeout`] after `timeout`.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            inner: self.inner.with_timeout(timeout),
        }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::AlreadyExists(id) => ProductError::AlreadyExists(id),
            FrameworkError::Timeout(limit) => ProductError::Timeout(limit),
            // Validation failures come back boxed from the entity.
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    pub async fn list_products(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<ProductsPage, ProductError> {
        let page = self.list(offset, limit).await?;
        Ok(ProductsPage {
            products: page.items,
            total: page.total,
        })
    }

    /// Create a product and hand back the stored record.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.get_product(id).await
    }
}

#[async_trait]
impl ProductLookup for ProductClient {
    async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        ProductClient::get_product(self, id).await
    }
}
