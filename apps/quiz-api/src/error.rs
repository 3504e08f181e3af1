//! Error types for the quiz API server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            ServerError::NotFound(what) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", format!("{} not found", what))
            }
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
