//! # Favorites Service
//!
//! A gateway in front of a user store and a product catalog. Every user the service hands
//! out carries its favorite products, resolved through concurrent catalog lookups.
//!
//! - [`model`]: records and response shapes
//! - [`user_actor`], [`product_actor`]: the two actors and their errors
//! - [`clients`]: typed clients over the actors
//! - [`favorites`]: fan-out lookup and failure policy
//! - [`user_service`]: user operations with favorites enrichment
//! - [`gateway`]: HTTP routes
//! - [`config`], [`lifecycle`]: startup, wiring, shutdown

pub mod clients;
pub mod config;
pub mod favorites;
pub mod gateway;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod user_actor;
pub mod user_service;
