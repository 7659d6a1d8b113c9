//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the error type of the record stores
//! and of process startup; `EnrichmentError` is the separate taxonomy of the order enrichment
//! path, which never lets a store or upstream error cross its boundary unchanged.

pub mod config;
pub mod enrichment;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Aggregates the errors that can occur in the record stores and during startup and provides
/// conversion to HTTP responses. Each client-facing variant maps to a distinct status code and
/// error kind so callers can tell a rejected write from a malformed identifier from a missing
/// record.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Socket bind or serve error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A required field is missing or malformed on create.
    ///
    /// Results in 400 Bad Request with kind `validation_error`.
    #[error("{0}")]
    Validation(String),

    /// The identifier does not match the store's identifier syntax.
    ///
    /// Checked before any lookup. Results in 400 Bad Request with kind `invalid_id`.
    #[error("Invalid ID format: '{0}'")]
    InvalidId(String),

    /// Syntactically valid identifier with no matching record.
    ///
    /// Results in 404 Not Found with kind `not_found`.
    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    fn response(status: StatusCode, kind: &str, error: String) -> Response {
        (
            status,
            Json(ErrorDto {
                kind: kind.to_string(),
                error,
            }),
        )
            .into_response()
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `InvalidId`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types (DbErr, IoErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(msg) => Self::response(StatusCode::BAD_REQUEST, "validation_error", msg),
            err @ Self::InvalidId(_) => {
                Self::response(StatusCode::BAD_REQUEST, "invalid_id", err.to_string())
            }
            Self::NotFound(msg) => Self::response(StatusCode::NOT_FOUND, "not_found", msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        AppError::response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "Internal server error".to_string(),
        )
    }
}
