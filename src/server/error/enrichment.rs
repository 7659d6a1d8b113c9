use std::{fmt, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

/// A dependency of the enrichment path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    /// The local order table.
    OrderStore,
    /// The member service, reached over HTTP.
    MemberService,
    /// The book service, reached over HTTP.
    BookService,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrderStore => write!(f, "order store"),
            Self::MemberService => write!(f, "member service"),
            Self::BookService => write!(f, "book service"),
        }
    }
}

/// Which reference of an order points at a record that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSide {
    Member,
    Book,
}

impl fmt::Display for ReferenceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member => write!(f, "member"),
            Self::Book => write!(f, "book"),
        }
    }
}

/// Why a single dependency call could not be completed.
///
/// Stays inside the enrichment path: it is only ever surfaced wrapped in
/// `EnrichmentError::UpstreamUnavailable`, and its details are logged rather than returned to
/// the caller.
#[derive(Error, Debug)]
pub enum UpstreamFailure {
    /// No complete response within the configured bound.
    #[error("no response within {0:?}")]
    Timeout(Duration),

    /// Connection refused, reset, DNS failure and the like.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream answered with a status other than success or not-found.
    #[error("responded with status {0}")]
    Status(u16),

    /// The upstream answered with a success status but a body that is not the expected record.
    #[error("returned an unreadable body: {0}")]
    Decode(#[source] reqwest::Error),

    /// The configured base URL cannot carry a record path.
    #[error("base url '{0}' cannot be extended with a record path")]
    InvalidUrl(String),

    /// The local order table could not be queried.
    #[error("database error: {0}")]
    Database(#[source] sea_orm::DbErr),
}

/// Outcome kinds of order enrichment.
///
/// Every failure of the order lookup or of the member/book calls is reclassified into exactly
/// one of these variants.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    /// The order identifier is not a valid record identifier.
    #[error("Invalid order ID format: '{0}'")]
    InvalidId(String),

    /// No order exists with the identifier.
    #[error("Order {0} not found")]
    OrderNotFound(Uuid),

    /// The order references a member and/or book that does not exist.
    #[error("Order {order_id} references a {} that does not exist", describe_sides(.missing))]
    DanglingReference {
        order_id: Uuid,
        missing: Vec<ReferenceSide>,
    },

    /// A dependency call could not be completed.
    #[error("The {upstream} is unavailable: {source}")]
    UpstreamUnavailable {
        upstream: Upstream,
        #[source]
        source: UpstreamFailure,
    },
}

fn describe_sides(sides: &[ReferenceSide]) -> String {
    sides
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" and ")
}

impl EnrichmentError {
    /// Stable machine-readable classifier used in the error body.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidId(_) => "invalid_id",
            Self::OrderNotFound(_) => "order_not_found",
            Self::DanglingReference { .. } => "dangling_reference",
            Self::UpstreamUnavailable { .. } => "upstream_unavailable",
        }
    }
}

/// Converts enrichment errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidId`
/// - 404 Not Found - For `OrderNotFound`
/// - 409 Conflict - For `DanglingReference`
/// - 504 Gateway Timeout - For `UpstreamUnavailable` caused by a timeout
/// - 502 Bad Gateway - For any other `UpstreamUnavailable`
impl IntoResponse for EnrichmentError {
    fn into_response(self) -> Response {
        let kind = self.kind().to_string();

        let (status, error) = match &self {
            Self::InvalidId(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::OrderNotFound(_) => (StatusCode::NOT_FOUND, "Order not found".to_string()),
            Self::DanglingReference { .. } => {
                tracing::warn!("{}", self);
                (StatusCode::CONFLICT, self.to_string())
            }
            Self::UpstreamUnavailable { upstream, source } => {
                match source {
                    UpstreamFailure::Database(_) => tracing::error!("{}", self),
                    _ => tracing::warn!("{}", self),
                }

                let status = match source {
                    UpstreamFailure::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                    _ => StatusCode::BAD_GATEWAY,
                };

                (
                    status,
                    format!("The {} is currently unavailable, please try again.", upstream),
                )
            }
        };

        (status, Json(ErrorDto { kind, error })).into_response()
    }
}
