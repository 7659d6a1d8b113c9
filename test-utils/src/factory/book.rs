//! Book factory for creating test book records.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test books with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::book::BookFactory;
///
/// let book = BookFactory::new(&db)
///     .title("Dune")
///     .isbn("9780441013593")
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    author: String,
    isbn: String,
    publisher: String,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Book {n}"`
    /// - author: `"Author {n}"`
    /// - isbn: 13 digits derived from `n`
    /// - publisher: `"Publisher {n}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            title: format!("Book {}", n),
            author: format!("Author {}", n),
            isbn: format!("978{:010}", n),
            publisher: format!("Publisher {}", n),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    /// Builds and inserts the book into the database.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - Created book
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            author: ActiveValue::Set(self.author),
            isbn: ActiveValue::Set(self.isbn),
            publisher: ActiveValue::Set(self.publisher),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values.
///
/// Shorthand for `BookFactory::new(db).build().await`.
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).build().await
}
