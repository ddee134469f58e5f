use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::BlobStoreError;
use crate::application::services::UploadError;

/// Uniform JSON failure body: `{ok: false, message}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub message: String,
}

/// Request-level failure. Every error raised while handling a request is
/// funneled through this type, so the caller always receives exactly one
/// JSON response.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { ok: false, message })).into_response()
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::UnsupportedFormat | UploadError::TooLarge { .. } => {
                ApiError::BadRequest(err.to_string())
            }
            // A failed source stream means the client body broke off or was
            // malformed, not that the store is unhealthy.
            UploadError::Store(BlobStoreError::Io(e)) => {
                ApiError::BadRequest(format!("Failed to read upload: {}", e))
            }
            UploadError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}
