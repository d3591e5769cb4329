use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::source::FetchError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Query parameter '{0}' must be greater than zero")]
    InvalidDimension(&'static str),

    #[error(transparent)]
    SourceFetch(#[from] FetchError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures inside the decode/transform/encode pipeline.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("File size exceeded 20Mb ({size} bytes)")]
    PayloadTooLarge { size: usize },

    #[error("Unsupported file type. Supported file types are GIF, ICO, JPEG, PNG")]
    UnsupportedFormat,

    #[error("Encode error: {0}")]
    Encode(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidDimension(_) => StatusCode::BAD_REQUEST,
            ApiError::SourceFetch(_) => StatusCode::BAD_REQUEST,
            ApiError::Transform(TransformError::PayloadTooLarge { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Transform(TransformError::UnsupportedFormat) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            ApiError::Transform(TransformError::Encode(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
