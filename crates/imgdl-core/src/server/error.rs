//! HTTP error mapping. Every error body is `{"error": "<message>"}`.

use crate::error::ImgdlError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file part in the request")]
    NoFilePart,

    #[error("No selected file")]
    NoSelectedFile,

    #[error("Invalid multipart data: {0}")]
    InvalidMultipart(String),

    #[error(transparent)]
    Core(#[from] ImgdlError),

    /// Catch-all for faults outside the domain (blocking pool gone, etc.).
    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoFilePart | ApiError::NoSelectedFile | ApiError::InvalidMultipart(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Core(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Core(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        HttpResponse::build(status).json(serde_json::json!({ "error": self.to_string() }))
    }
}

impl From<actix_web::error::BlockingError> for ApiError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        ApiError::Core(ImgdlError::Io(e))
    }
}
