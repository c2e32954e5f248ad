//! One handler per route. Each forwards to a single service call and shapes the response.

use super::error::ApiResult;
use super::AppState;
use crate::model::{
    Product, ProductCreate, ProductId, ProductsPage, UserCreate, UserId, UserResponse, UsersPage,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

const DEFAULT_LIMIT: usize = 10;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// `?offset=&limit=`, defaulting to the first ten records.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub product_id: ProductId,
}

pub async fn banner() -> Json<Value> {
    Json(json!({ "message": "favorites gateway" }))
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.users.get_user(UserId(id)).await?;
    Ok(Json(user))
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> ApiResult<Json<UsersPage>> {
    let users = state.users.list_users(page.offset, page.limit).await?;
    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<UserCreate>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state.users.create_user(req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<FavoriteRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .users
        .add_favorite(UserId(user_id), req.product_id)
        .await?;
    Ok(Json(user))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((user_id, product_id)): Path<(String, String)>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .users
        .remove_favorite(UserId(user_id), ProductId(product_id))
        .await?;
    Ok(Json(user))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let product = state.products.get_product(ProductId(id)).await?;
    Ok(Json(product))
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> ApiResult<Json<ProductsPage>> {
    let products = state.products.list_products(page.offset, page.limit).await?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<ProductCreate>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let product = state.products.create_product(req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}
