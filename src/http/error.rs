//! Mapping of store outcomes onto HTTP status codes and JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use resource_store::{StoreError, ValidationError};
use serde_json::json;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No record with the requested identifier.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Validation(ValidationError),
    /// The body was not a JSON object.
    #[error("{0}")]
    BadRequest(String),
    /// No route matched the request.
    #[error("Not found")]
    NoRoute,
    #[error(transparent)]
    Internal(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, .. } => ApiError::NotFound(resource),
            StoreError::Validation(v) => ApiError::Validation(v),
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::NotFound(_) | ApiError::NoRoute => {
                (StatusCode::NOT_FOUND, json!({ "error": self.to_string() }))
            }
            ApiError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": e.to_string(), "fields": e.fields }),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::Internal(e) => {
                error!(error = %e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
