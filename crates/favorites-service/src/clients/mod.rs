//! Typed clients for the two actors. Each wraps a [`ResourceClient`](actor_framework::ResourceClient)
//! and speaks in domain types and domain errors.

pub mod product_client;
pub mod user_client;

pub use product_client::ProductClient;
pub use user_client::UserClient;
