//! # HTTP Errors
//!
//! Error type for the HTTP routes. The body always uses the same
//! `{"status":"error","code","message"}` shape as the CLI.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::api::{ApiError, ErrorResponse};
use crate::engine::EngineErrorCode;
use crate::errors::ErrorClass;

/// Result type for HTTP handlers
pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, Error)]
pub enum HttpError {
    /// Body missing, not JSON, or wrong shape
    #[error("Invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    /// Error raised by the engine or the table
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl HttpError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            HttpError::Api(err) => match err.class() {
                ErrorClass::Input => StatusCode::BAD_REQUEST,
                ErrorClass::Collaborator if err.code() == EngineErrorCode::AbxUnknownItem.code() => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                ErrorClass::Collaborator => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            HttpError::InvalidBody(rejection) => {
                ErrorResponse::from_error(&ApiError::invalid_request(rejection.body_text()))
            }
            HttpError::Api(err) => ErrorResponse::from_error(err),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
