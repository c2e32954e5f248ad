//! Error types for the Product actor.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A product with the same id already exists.
    #[error("Product already exists: {0}")]
    AlreadyExists(String),

    /// The price is negative or not a number.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// The catalog did not answer in time.
    #[error("Product call timed out after {0:?}")]
    Timeout(Duration),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
