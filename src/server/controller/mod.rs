//! HTTP request handlers.
//!
//! Controllers parse and validate request input, call the service layer and convert domain
//! models into DTOs. Identifier syntax is checked here, before any lookup, so a malformed
//! identifier is always reported as such and never as a missing record.

pub mod book;
pub mod health;
pub mod member;
pub mod order;

use axum::{extract::rejection::JsonRejection, Json};

use crate::server::error::AppError;

/// Unwraps a JSON body, turning a malformed or undeserializable body into a validation error.
fn json_payload<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(AppError::Validation(rejection.body_text())),
    }
}
