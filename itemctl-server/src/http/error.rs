//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Request body could not be decoded (400)
    BadRequest { message: String },

    /// Method other than GET/POST/OPTIONS (400)
    UnsupportedMethod { method: String },

    /// Store refused the write (400, logged)
    InsertFailed(DbError),

    /// Store read failed (500, logged)
    Database(DbError),

    /// Internal error (500)
    Internal { message: String },
}

impl ApiError {
    /// Map a create-path store error.
    ///
    /// Write failures are the client's problem (bad references and the like);
    /// failing to mint an identifier is ours.
    pub fn from_insert(e: DbError) -> Self {
        match e {
            DbError::Id(e) => Self::Internal {
                message: e.to_string(),
            },
            other => Self::InsertFailed(other),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::BadRequest { .. }
            | Self::UnsupportedMethod { .. }
            | Self::InsertFailed(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(e) => json!({
                "error": "validation_error",
                "message": e.to_string()
            }),
            Self::BadRequest { message } => json!({
                "error": "bad_request",
                "message": message
            }),
            Self::UnsupportedMethod { method } => {
                tracing::warn!(%method, "unsupported HTTP method");
                json!({
                    "error": "unsupported_method",
                    "message": format!("method {} is not supported", method)
                })
            }
            Self::InsertFailed(e) => {
                tracing::warn!("Insert failed: {}", e);
                let message = match e {
                    DbError::MissingReference(what) => format!("referenced {} does not exist", what),
                    _ => "item could not be created".to_string(),
                };
                json!({
                    "error": "insert_failed",
                    "message": message
                })
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                json!({
                    "error": "internal_error",
                    "message": "an internal error occurred"
                })
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                json!({
                    "error": "internal_error",
                    "message": "an internal error occurred"
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest {
            message: rejection.body_text(),
        }
    }
}
