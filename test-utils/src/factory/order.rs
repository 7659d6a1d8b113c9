//! Order factory for creating test loan records.

use chrono::{Duration, NaiveDate};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test orders with customizable dates.
///
/// The member and book references are plain identifiers. Nothing checks that they exist, which
/// lets tests build orders whose references dangle.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db, member_id, book_id)
///     .initial_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    member_ref: Uuid,
    book_ref: Uuid,
    initial_date: NaiveDate,
    delivery_date: Option<NaiveDate>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory.
    ///
    /// Defaults:
    /// - initial_date: 2024-01-01
    /// - delivery_date: 14 days after initial_date
    pub fn new(db: &'a DatabaseConnection, member_ref: Uuid, book_ref: Uuid) -> Self {
        Self {
            db,
            member_ref,
            book_ref,
            initial_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            delivery_date: None,
        }
    }

    pub fn initial_date(mut self, date: NaiveDate) -> Self {
        self.initial_date = date;
        self
    }

    pub fn delivery_date(mut self, date: NaiveDate) -> Self {
        self.delivery_date = Some(date);
        self
    }

    /// Builds and inserts the order into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let delivery_date = self
            .delivery_date
            .unwrap_or(self.initial_date + Duration::days(14));

        entity::order::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            member_ref: ActiveValue::Set(self.member_ref),
            book_ref: ActiveValue::Set(self.book_ref),
            initial_date: ActiveValue::Set(self.initial_date),
            delivery_date: ActiveValue::Set(delivery_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default dates referencing the given member and book.
pub async fn create_order(
    db: &DatabaseConnection,
    member_ref: Uuid,
    book_ref: Uuid,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, member_ref, book_ref).build().await
}
