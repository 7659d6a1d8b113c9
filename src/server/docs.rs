//! OpenAPI documents, one per service.

use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto, MessageDto},
        book::{BookDto, CreateBookDto},
        member::{CreateMemberDto, MemberDto},
        order::{CreateOrderDto, OrderDetailsDto, OrderDto},
    },
    server::controller::{book, health, member, order},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Books Service", description = "Book record store"),
    paths(
        health::health,
        book::create_book,
        book::get_books,
        book::get_book_by_id,
        book::delete_book
    ),
    components(schemas(BookDto, CreateBookDto, ErrorDto, HealthDto, MessageDto))
)]
pub struct BookApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "Members Service", description = "Member record store"),
    paths(
        health::health,
        member::create_member,
        member::get_members,
        member::get_member_by_id,
        member::delete_member
    ),
    components(schemas(MemberDto, CreateMemberDto, ErrorDto, HealthDto, MessageDto))
)]
pub struct MemberApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orders Service",
        description = "Order record store and order enrichment"
    ),
    paths(
        health::health,
        order::create_order,
        order::get_orders,
        order::get_order_by_id,
        order::get_order_details
    ),
    components(schemas(OrderDto, CreateOrderDto, OrderDetailsDto, ErrorDto, HealthDto))
)]
pub struct OrderApiDoc;
