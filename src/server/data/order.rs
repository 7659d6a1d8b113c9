//! Order data repository for database operations.
//!
//! Orders are append-only: there is no update or delete.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

use crate::server::model::order::{CreateOrderParams, Order};

/// Repository providing database operations for the order table.
pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new order with a freshly assigned identifier.
    ///
    /// The member and book references are stored as given, without checking that they exist.
    ///
    /// # Returns
    /// - `Ok(Order)` - The stored order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, DbErr> {
        let entity = entity::order::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            member_ref: ActiveValue::Set(params.member_ref),
            book_ref: ActiveValue::Set(params.book_ref),
            initial_date: ActiveValue::Set(params.initial_date),
            delivery_date: ActiveValue::Set(params.delivery_date),
        }
        .insert(self.db)
        .await?;

        Ok(Order::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Order::find().all(self.db).await?;

        Ok(entities.into_iter().map(Order::from_entity).collect())
    }

    /// Gets an order by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Order found
    /// - `Ok(None)` - No order with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Order>, DbErr> {
        let entity = entity::prelude::Order::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Order::from_entity))
    }
}
