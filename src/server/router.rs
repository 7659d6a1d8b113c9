use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::server::{
    config::ServiceKind,
    controller::{
        book::{create_book, delete_book, get_book_by_id, get_books},
        health::{health, home, openapi},
        member::{create_member, delete_member, get_member_by_id, get_members},
        order::{create_order, get_order_by_id, get_order_details, get_orders},
    },
    state::{AppState, OrderState},
};

pub fn books_router() -> Router<AppState> {
    Router::new()
        .route("/book", post(create_book))
        .route("/books", get(get_books))
        .route("/books/{id}", get(get_book_by_id).delete(delete_book))
        .merge(service_routes())
        .layer(Extension(ServiceKind::Books))
}

pub fn members_router() -> Router<AppState> {
    Router::new()
        .route("/member", post(create_member))
        .route("/members", get(get_members))
        .route("/members/{id}", get(get_member_by_id).delete(delete_member))
        .merge(service_routes())
        .layer(Extension(ServiceKind::Members))
}

pub fn orders_router() -> Router<OrderState> {
    Router::new()
        .route("/order", post(create_order))
        .route("/orders", get(get_orders))
        .route("/orders/{id}", get(get_order_by_id))
        .route("/order/{id}", get(get_order_details))
        .merge(service_routes())
        .layer(Extension(ServiceKind::Orders))
}

/// Landing, liveness and API document routes shared by every service.
fn service_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi))
}
