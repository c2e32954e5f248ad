//! Plain data records owned by the actors, plus the outward response shapes.

mod product;
mod user;

pub use product::*;
pub use user::*;
