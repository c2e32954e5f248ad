//! # Favorites Aggregation
//!
//! Turns a user's favorite ids into product records: one catalog lookup per id, all in
//! flight at once, gathered with a wait-all join. What happens when some lookups fail is
//! decided by the [`FailurePolicy`]:
//!
//! - [`FailurePolicy::AllOrNothing`] (default): one failure empties the whole list.
//! - [`FailurePolicy::Partial`]: failed ids are dropped, the rest keep their order.
//!
//! Failures never reach the caller. Each one is logged at `warn` with the product id.

use crate::model::{Product, ProductId};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

/// Single-product lookup against the catalog.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn get_product(&self, id: ProductId) -> Result<Product, ProductError>;
}

/// Shared handle to whatever answers product lookups.
pub type DynProductLookup = Arc<dyn ProductLookup>;

/// How lookup failures shape the aggregated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FailurePolicy {
    #[default]
    AllOrNothing,
    Partial,
}

/// Outcome of one lookup, tied to the id it was made for.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteResolution {
    pub product_id: ProductId,
    pub outcome: Result<Product, ProductError>,
}

/// Apply `policy` to gathered lookups. Output order follows input order.
pub fn collapse(resolutions: Vec<FavoriteResolution>, policy: FailurePolicy) -> Vec<Product> {
    let mut products = Vec::with_capacity(resolutions.len());
    let mut failed = 0;
    for resolution in resolutions {
        match resolution.outcome {
            Ok(product) => products.push(product),
            Err(error) => {
                warn!(product_id = %resolution.product_id, %error, "favorite lookup failed");
                failed += 1;
            }
        }
    }

    if failed > 0 && policy == FailurePolicy::AllOrNothing {
        debug!(failed, "discarding favorites");
        return Vec::new();
    }
    products
}

/// Resolves favorite ids through a [`ProductLookup`].
#[derive(Clone)]
pub struct FavoritesAggregator {
    products: DynProductLookup,
    policy: FailurePolicy,
}

impl FavoritesAggregator {
    pub fn new(products: DynProductLookup, policy: FailurePolicy) -> Self {
        Self { products, policy }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Look up every id concurrently and wait for all of them.
    pub async fn gather(&self, ids: &[ProductId]) -> Vec<FavoriteResolution> {
        join_all(ids.iter().cloned().map(|product_id| async move {
            let outcome = self.products.get_product(product_id.clone()).await;
            FavoriteResolution {
                product_id,
                outcome,
            }
        }))
        .await
    }

    /// Product records for `ids`, shaped by the configured policy.
    ///
    /// An empty list returns immediately without touching the catalog.
    pub async fn resolve(&self, ids: &[ProductId]) -> Vec<Product> {
        if ids.is_empty() {
            return Vec::new();
        }
        collapse(self.gather(ids).await, self.policy)
    }
}
