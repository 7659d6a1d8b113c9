use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
///
/// `kind` is a stable machine-readable classifier (`validation_error`, `invalid_id`,
/// `not_found`, `order_not_found`, `dangling_reference`, `upstream_unavailable`,
/// `internal_error`); `error` is a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub kind: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Liveness probe response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub service: String,
    pub status: String,
}
