use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("user `{0}` not found")]
    UserNotFound(String),
    #[error("user `{0}` already exists")]
    UserAlreadyExists(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UserNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UserAlreadyExists(_) => StatusCode::CONFLICT,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
