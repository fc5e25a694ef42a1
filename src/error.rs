//! # Centralized Error Handling
//!
//! Every handler returns [`AppResult`], and every failure is rendered as a JSON
//! body of the form `{"error": "<message>"}`. Store errors and rejected
//! requests are logged here with their full cause and reach the client only as
//! a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Central application error type.
///
/// _Db and Rejected errors are logged automatically, NotFound should be logged
/// at the point of creation if needed._
#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error")]
    Db(#[from] sqlx::Error),

    #[error("not found: {0}")]
    NotFound(&'static str),

    /// A body or path the extractors could not deserialize. The detail is for
    /// the logs only.
    #[error("rejected request: {0}")]
    Rejected(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Db(e) = &self {
            error!(?e, "Database error occurred");
        }
        if let AppError::Rejected(detail) = &self {
            warn!(%detail, "Request could not be deserialized");
        }

        let (status, message) = match self {
            AppError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Rejected(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
