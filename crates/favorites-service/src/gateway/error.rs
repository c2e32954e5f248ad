//! Service errors as HTTP responses. Every error body is `{"error": "<message>"}`.

use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Timeout(String),
    #[error("{0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => ApiError::NotFound(e.to_string()),
            UserError::AlreadyExists(_) => ApiError::Conflict(e.to_string()),
            UserError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => ApiError::NotFound(e.to_string()),
            ProductError::AlreadyExists(_) => ApiError::Conflict(e.to_string()),
            ProductError::InvalidPrice(_) => ApiError::BadRequest(e.to_string()),
            ProductError::Timeout(_) => ApiError::Timeout(e.to_string()),
            ProductError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Internal(detail) => {
                error!(%detail, "request failed");
                "internal error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::from(UserError::NotFound("1".into())), StatusCode::NOT_FOUND),
            (ApiError::from(UserError::AlreadyExists("1".into())), StatusCode::CONFLICT),
            (ApiError::from(ProductError::InvalidPrice(-1.0)), StatusCode::BAD_REQUEST),
            (
                ApiError::from(ProductError::Timeout(Duration::from_millis(10))),
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (
                ApiError::from(ProductError::ActorCommunicationError("closed".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.status(), status);
        }
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let response = ApiError::Internal("channel closed".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
