use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderDetailsDto, OrderDto},
    },
    server::{
        controller::json_payload,
        error::{enrichment::EnrichmentError, AppError},
        model::order::CreateOrderParams,
        service::{enrichment::OrderEnrichmentService, order::OrderService},
        state::OrderState,
        util::parse::parse_record_id,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Create a new order.
///
/// The referenced member and book must be well-formed IDs but are not checked for existence.
///
/// # Returns
/// - `201 Created` - Successfully created order
/// - `400 Bad Request` - Missing field, malformed reference or unparseable date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/order",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Successfully created order", body = OrderDto),
        (status = 400, description = "Invalid order data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<OrderState>,
    payload: Result<Json<CreateOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateOrderParams::from_dto(json_payload(payload)?)?;

    let order = OrderService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Get all orders.
#[utoipa::path(
    get,
    path = "/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved orders", body = Vec<OrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(State(state): State<OrderState>) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db).get_all().await?;

    let orders: Vec<OrderDto> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(orders)))
}

/// Get a specific order record by ID.
///
/// Returns the stored record with its raw member and book references.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = String, Path, description = "Order ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved order", body = OrderDto),
        (status = 400, description = "Malformed order ID", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_by_id(
    State(state): State<OrderState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_record_id(&id)?;

    match OrderService::new(&state.db).get_by_id(id).await? {
        Some(order) => Ok((StatusCode::OK, Json(order.into_dto()))),
        None => Err(AppError::NotFound("Order not found".to_string())),
    }
}

/// Get the enriched view of an order.
///
/// Resolves the order's member and book through the member and book services and returns the
/// member's name, the book's title and the loan dates.
///
/// # Returns
/// - `200 OK` - Enriched order view
/// - `400 Bad Request` - Malformed order ID (`invalid_id`)
/// - `404 Not Found` - No order with that ID (`order_not_found`)
/// - `409 Conflict` - The member or book no longer exists (`dangling_reference`)
/// - `502 Bad Gateway` - A dependency failed (`upstream_unavailable`)
/// - `504 Gateway Timeout` - A dependency did not answer in time (`upstream_unavailable`)
#[utoipa::path(
    get,
    path = "/order/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = String, Path, description = "Order ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully enriched order", body = OrderDetailsDto),
        (status = 400, description = "Malformed order ID", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Order references a missing member or book", body = ErrorDto),
        (status = 502, description = "Member or book service unavailable", body = ErrorDto),
        (status = 504, description = "Member or book service timed out", body = ErrorDto)
    ),
)]
pub async fn get_order_details(
    State(state): State<OrderState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, EnrichmentError> {
    let details = OrderEnrichmentService::new(&state.db, &state.upstream)
        .enrich(&id)
        .await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}
