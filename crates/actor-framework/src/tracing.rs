//! # Observability
//!
//! One-time setup of the `tracing` subscriber shared by every binary built on the framework.
//!
//! The actor loop already records structured events (`entity_type`, `id`, `size`) for every
//! request; clients add `#[instrument]` spans on top, so a request shows up as one nested
//! trail:
//!
//! ```text
//! INFO get_user{id=UserId("1")}: Get entity_type="User" id=1 found=true
//! WARN get_user{id=UserId("1")}: favorite lookup failed product_id=9 error=Product not found: 9
//! ```
//!
//! `RUST_LOG` wins when set; otherwise the directive passed by the caller applies.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: env filter, compact format, no module targets.
///
/// Returns `false` when a subscriber was already installed (tests call this repeatedly).
pub fn setup_tracing(default_directive: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
