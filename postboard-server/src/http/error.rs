//! API error type with IntoResponse
//!
//! Every client-facing failure is a 422 with body `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::models::ValidationError;
use crate::store::StoreError;

/// Status used for every user error on the posts API
pub const STATUS_USER_ERROR: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Validation or lookup failure from the store
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Body was not JSON of the expected shape
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Store(StoreError::Validation(e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::debug!(error = %message, "request rejected");

        (STATUS_USER_ERROR, Json(json!({ "error": message }))).into_response()
    }
}
