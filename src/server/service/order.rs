use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::order::OrderRepository,
    error::AppError,
    model::order::{CreateOrderParams, Order},
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new order
    ///
    /// The referenced member and book are not checked for existence; a dangling reference is
    /// only detected when the order is enriched.
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);

        let order = repo.create(params).await?;

        tracing::debug!(
            "Created order {} (member {}, book {})",
            order.id,
            order.member_ref,
            order.book_ref
        );

        Ok(order)
    }

    /// Gets every order
    pub async fn get_all(&self) -> Result<Vec<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific order by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }
}
