//! Order domain models: the stored loan record and the enriched view built from it.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    model::order::{CreateOrderDto, OrderDetailsDto, OrderDto},
    server::{
        error::AppError,
        util::parse::{required_date, required_reference},
    },
};

/// A loan record as held by the order store.
///
/// `member_ref` and `book_ref` are identifiers in other stores; nothing guarantees they still
/// resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub member_ref: Uuid,
    pub book_ref: Uuid,
    pub initial_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

impl Order {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            id: entity.id,
            member_ref: entity.member_ref,
            book_ref: entity.book_ref,
            initial_date: entity.initial_date,
            delivery_date: entity.delivery_date,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            member_ref: self.member_ref,
            book_ref: self.book_ref,
            initial_date: self.initial_date,
            delivery_date: self.delivery_date,
        }
    }
}

/// Validated input for creating an order.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub member_ref: Uuid,
    pub book_ref: Uuid,
    pub initial_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

impl CreateOrderParams {
    /// Validates a creation payload.
    ///
    /// References must be syntactically valid identifiers and both dates must parse. The
    /// referenced member and book are not looked up, and the delivery date is not checked
    /// against the initial date.
    pub fn from_dto(dto: CreateOrderDto) -> Result<Self, AppError> {
        Ok(Self {
            member_ref: required_reference("memberRef", dto.member_ref)?,
            book_ref: required_reference("bookRef", dto.book_ref)?,
            initial_date: required_date("initialDate", dto.initial_date)?,
            delivery_date: required_date("deliveryDate", dto.delivery_date)?,
        })
    }
}

/// Loan view assembled from an order and the member and book it references.
///
/// Recomputed on every request and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetails {
    pub member_name: String,
    pub book_title: String,
    pub initial_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

impl OrderDetails {
    pub fn into_dto(self) -> OrderDetailsDto {
        OrderDetailsDto {
            member_name: self.member_name,
            book_title: self.book_title,
            initial_date: self.initial_date,
            delivery_date: self.delivery_date,
        }
    }
}
