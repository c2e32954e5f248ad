//! # System Lifecycle
//!
//! Creating, wiring, seeding and stopping the actors behind the gateway.
//!
//! ## Wiring
//!
//! Actors are created first and receive their dependencies through `run(context)`. Neither
//! store needs one today, so both run with `()`. The user service is wired afterwards from
//! clones of the actor clients:
//!
//! ```text
//! UserService ──► UserClient ──────────────► user actor
//!      │
//!      └──► FavoritesAggregator ──► ProductClient (timeout) ──► product actor
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. Drop every client the system holds; the request channels close.
//! 2. Each actor drains what is queued, logs its final size and exits.
//! 3. Await the actor tasks.
//!
//! Clones held elsewhere (the HTTP router state, for instance) keep a channel open, so the
//! gateway must be stopped before [`ServiceSystem::shutdown`] is awaited.

pub mod service_system;

pub use service_system::*;
