//! # Gateway
//!
//! The HTTP front door. Routes map one-to-one onto [`UserService`] and [`ProductClient`]
//! calls; the only logic here is request parsing and error-to-status mapping.
//!
//! | Route | Call |
//! |---|---|
//! | `GET /` | banner |
//! | `GET /health` | liveness |
//! | `GET /users?offset&limit` | [`UserService::list_users`] |
//! | `POST /users` | [`UserService::create_user`] (201) |
//! | `GET /users/{id}` | [`UserService::get_user`] |
//! | `POST /users/{id}/favorites` | [`UserService::add_favorite`] |
//! | `DELETE /users/{id}/favorites/{product_id}` | [`UserService::remove_favorite`] |
//! | `GET /products?offset&limit` | [`ProductClient::list_products`] |
//! | `POST /products` | [`ProductClient::create_product`] (201) |
//! | `GET /products/{id}` | [`ProductClient::get_product`] |

pub mod error;
pub mod handlers;

pub use error::{ApiError, ApiResult};

use crate::clients::ProductClient;
use crate::lifecycle::ServiceSystem;
use crate::user_service::UserService;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Handles shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub products: ProductClient,
}

impl AppState {
    pub fn new(users: UserService, products: ProductClient) -> Self {
        Self { users, products }
    }

    pub fn from_system(system: &ServiceSystem) -> Self {
        Self::new(system.user_service.clone(), system.product_client.clone())
    }
}

/// Build the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::banner))
        .route("/health", get(handlers::health))
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route("/users/{id}", get(handlers::get_user))
        .route("/users/{id}/favorites", post(handlers::add_favorite))
        .route(
            "/users/{id}/favorites/{product_id}",
            delete(handlers::remove_favorite),
        )
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/products/{id}", get(handlers::get_product))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
