use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const KEY_EXISTS_MESSAGE: &str = "Key already exists.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", KEY_EXISTS_MESSAGE)]
    KeyExists,
    #[error("not found")]
    NotFound,
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Conflict(_) => ApiError::KeyExists,
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::KeyExists => (StatusCode::BAD_REQUEST, Json(KEY_EXISTS_MESSAGE)).into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: msg })).into_response()
            }
        }
    }
}
