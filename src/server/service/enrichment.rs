//! Order enrichment: turns an order identifier into a human-readable loan view.
//!
//! The order is read from the local store, then the member and book it references are looked
//! up concurrently in their own services. The outcome is either a complete view or exactly one
//! `EnrichmentError`; a view is never assembled from partial data.

use sea_orm::DatabaseConnection;

use crate::{
    model::{book::BookDto, member::MemberDto},
    server::{
        data::order::OrderRepository,
        error::enrichment::{EnrichmentError, ReferenceSide, Upstream, UpstreamFailure},
        model::order::{Order, OrderDetails},
        service::upstream::{Lookup, UpstreamClient},
        util::parse::parse_record_id,
    },
};

pub struct OrderEnrichmentService<'a> {
    db: &'a DatabaseConnection,
    upstream: &'a UpstreamClient,
}

impl<'a> OrderEnrichmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, upstream: &'a UpstreamClient) -> Self {
        Self { db, upstream }
    }

    /// Builds the loan view for an order.
    ///
    /// # Arguments
    /// - `order_id` - Raw order identifier as received from the client
    ///
    /// # Returns
    /// - `Ok(OrderDetails)` - Member name, book title and the order's dates
    /// - `Err(EnrichmentError::InvalidId)` - `order_id` is not a record identifier
    /// - `Err(EnrichmentError::OrderNotFound)` - No order with that identifier
    /// - `Err(EnrichmentError::UpstreamUnavailable)` - The order store, member service or book
    ///   service could not answer within the timeout
    /// - `Err(EnrichmentError::DanglingReference)` - The member and/or book no longer exists
    pub async fn enrich(&self, order_id: &str) -> Result<OrderDetails, EnrichmentError> {
        let id = parse_record_id(order_id)
            .map_err(|_| EnrichmentError::InvalidId(order_id.to_string()))?;

        let order = OrderRepository::new(self.db)
            .get_by_id(id)
            .await
            .map_err(|e| EnrichmentError::UpstreamUnavailable {
                upstream: Upstream::OrderStore,
                source: UpstreamFailure::Database(e),
            })?
            .ok_or(EnrichmentError::OrderNotFound(id))?;

        let (member, book) = tokio::join!(
            self.upstream.get_member(order.member_ref),
            self.upstream.get_book(order.book_ref),
        );

        assemble(order, member, book)
    }
}

/// Combines the order with the outcome of both lookups.
///
/// An unavailable upstream takes precedence over a missing record, and the member side is
/// reported before the book side. When both records are missing both sides are named.
pub fn assemble(
    order: Order,
    member: Result<Lookup<MemberDto>, UpstreamFailure>,
    book: Result<Lookup<BookDto>, UpstreamFailure>,
) -> Result<OrderDetails, EnrichmentError> {
    let member = member.map_err(|source| EnrichmentError::UpstreamUnavailable {
        upstream: Upstream::MemberService,
        source,
    })?;
    let book = book.map_err(|source| EnrichmentError::UpstreamUnavailable {
        upstream: Upstream::BookService,
        source,
    })?;

    match (member, book) {
        (Lookup::Found(member), Lookup::Found(book)) => Ok(OrderDetails {
            member_name: member.name,
            book_title: book.title,
            initial_date: order.initial_date,
            delivery_date: order.delivery_date,
        }),
        (member, book) => {
            let mut missing = Vec::new();
            if matches!(member, Lookup::Missing) {
                missing.push(ReferenceSide::Member);
            }
            if matches!(book, Lookup::Missing) {
                missing.push(ReferenceSide::Book);
            }

            Err(EnrichmentError::DanglingReference {
                order_id: order.id,
                missing,
            })
        }
    }
}
