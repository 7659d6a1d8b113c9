//! Helpers for serving the routers over real sockets in tests.
//!
//! Order enrichment talks HTTP to the member and book services, so its tests run those
//! services for real on ephemeral local ports, each backed by its own in-memory database.

use std::time::Duration;

use axum::Router;
use sea_orm::DatabaseConnection;
use test_utils::builder::TestBuilder;
use tokio::net::TcpListener;
use url::Url;

use crate::server::{
    config::UpstreamConfig,
    router::{books_router, members_router, orders_router},
    service::upstream::UpstreamClient,
    state::{AppState, OrderState},
};


/// Default upstream bound used by tests that do not exercise timeouts.
pub(crate) const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Serves `router` on an ephemeral port and returns its base URL.
pub(crate) async fn serve(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Url::parse(&format!("http://{}", addr)).unwrap()
}

/// Runs a book service and returns its database (for seeding) and base URL.
pub(crate) async fn books_service() -> (DatabaseConnection, Url) {
    let mut test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.take_database().await.unwrap();

    let url = serve(books_router().with_state(AppState::new(db.clone()))).await;

    (db, url)
}

/// Runs a member service and returns its database (for seeding) and base URL.
pub(crate) async fn members_service() -> (DatabaseConnection, Url) {
    let mut test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.take_database().await.unwrap();

    let url = serve(members_router().with_state(AppState::new(db.clone()))).await;

    (db, url)
}

/// Runs an order service wired to the given upstream client.
pub(crate) async fn orders_service(upstream: UpstreamClient) -> (DatabaseConnection, Url) {
    let mut test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.take_database().await.unwrap();

    let url = serve(orders_router().with_state(OrderState::new(db.clone(), upstream))).await;

    (db, url)
}

/// A listener that accepts connections and never answers.
pub(crate) async fn silent_service() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    Url::parse(&format!("http://{}", addr)).unwrap()
}

/// A local address with nothing listening on it.
pub(crate) async fn closed_port() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    Url::parse(&format!("http://{}", addr)).unwrap()
}

pub(crate) fn upstream_client(
    member_service_url: Url,
    book_service_url: Url,
    timeout: Duration,
) -> UpstreamClient {
    let config = UpstreamConfig {
        member_service_url,
        book_service_url,
        timeout,
    };

    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(timeout)
        .build()
        .unwrap();

    UpstreamClient::new(http, &config)
}

/// Joins a path onto a served base URL.
pub(crate) fn endpoint(base: &Url, path: &str) -> Url {
    base.join(path).unwrap()
}
