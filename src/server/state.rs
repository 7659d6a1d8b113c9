//! Application state shared across request handlers.
//!
//! The state is initialized once during startup and cloned for each request through Axum's
//! state extraction. Every field is cheap to clone: `DatabaseConnection` is a connection pool
//! and `UpstreamClient` wraps a `reqwest::Client`, which shares its pool between clones.

use sea_orm::DatabaseConnection;

use crate::server::service::upstream::UpstreamClient;

/// State of the book and member services.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the service's own table.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// State of the order service.
#[derive(Clone)]
pub struct OrderState {
    /// Connection pool for the order table.
    pub db: DatabaseConnection,

    /// Client for the member and book services, used by order enrichment.
    pub upstream: UpstreamClient,
}

impl OrderState {
    pub fn new(db: DatabaseConnection, upstream: UpstreamClient) -> Self {
        Self { db, upstream }
    }
}
