//! # Product Actor
//!
//! The product catalog: one actor owning every [`Product`], answering lookups from the
//! favorites aggregator and the gateway.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`catalog`] - the products a new catalog is seeded with
//!
//! ```rust
//! use favorites_service::product_actor;
//! use favorites_service::model::ProductCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let created = client
//!         .create_product(ProductCreate::new("Widget", "A widget", 29.99, 100))
//!         .await?;
//!     assert_eq!(client.get_product(created.id).await?.name, "Widget");
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod entity;
pub mod error;

pub use catalog::default_catalog;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
