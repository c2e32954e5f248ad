//! Custom actions for the User actor.
//!
//! Favorites are edited in place by the actor so that concurrent edits of the same user are
//! applied one after the other. Both actions answer with the updated [`User`](crate::model::User).

use crate::model::ProductId;

/// Favorite-list edits.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Append the product id unless it is already a favorite.
    AddFavorite(ProductId),
    /// Drop the product id. Removing an id that is not a favorite is not an error.
    RemoveFavorite(ProductId),
}
