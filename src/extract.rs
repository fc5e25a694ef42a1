//! # Request Extractors
//!
//! Thin wrappers over axum's [`Json`](axum::Json) and [`Path`](axum::extract::Path)
//! extractors. Their rejections are turned into [`AppError::Rejected`], so a
//! malformed body or identifier is answered like any other server-side failure:
//! a 500 with a fixed `{"error": ...}` body that carries none of the parser's
//! detail.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor that rejects with [`AppError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Path parameter extractor that rejects with [`AppError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected(rejection.body_text())
    }
}
