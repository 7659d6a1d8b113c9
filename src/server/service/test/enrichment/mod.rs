use std::time::{Duration, Instant};

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use test_utils::{
    builder::TestBuilder,
    factory::{self, book::BookFactory, member::MemberFactory, order::OrderFactory},
};
use uuid::Uuid;

use crate::{
    model::{book::BookDto, member::MemberDto},
    server::{
        error::enrichment::{EnrichmentError, ReferenceSide, Upstream, UpstreamFailure},
        model::order::Order,
        service::{
            enrichment::{assemble, OrderEnrichmentService},
            upstream::Lookup,
        },
        test::{
            books_service, closed_port, members_service, serve, silent_service, upstream_client,
            TEST_TIMEOUT,
        },
    },
};

mod assemble;

fn loan() -> Order {
    Order {
        id: Uuid::new_v4(),
        member_ref: Uuid::new_v4(),
        book_ref: Uuid::new_v4(),
        initial_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        delivery_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    }
}

fn alice(id: Uuid) -> MemberDto {
    MemberDto {
        id,
        name: "Alice".to_string(),
        email: "a@x.com".to_string(),
        phone: None,
    }
}

fn dune(id: Uuid) -> BookDto {
    BookDto {
        id,
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        isbn: "9780441013593".to_string(),
        publisher: "Ace".to_string(),
    }
}

async fn order_store() -> DatabaseConnection {
    let mut test = TestBuilder::new().with_order_tables().build().await.unwrap();
    test.take_database().await.unwrap()
}
