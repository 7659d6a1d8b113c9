//! Book data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

use crate::server::model::book::{Book, CreateBookParams};

/// Repository providing database operations for the book table.
pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookRepository<'a> {
    /// Creates a new BookRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new book with a freshly assigned identifier.
    ///
    /// # Returns
    /// - `Ok(Book)` - The stored book
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateBookParams) -> Result<Book, DbErr> {
        let entity = entity::book::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(params.title),
            author: ActiveValue::Set(params.author),
            isbn: ActiveValue::Set(params.isbn),
            publisher: ActiveValue::Set(params.publisher),
        }
        .insert(self.db)
        .await?;

        Ok(Book::from_entity(entity))
    }

    /// Gets every book. No ordering is guaranteed.
    pub async fn get_all(&self) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find().all(self.db).await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }

    /// Gets a book by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - Book found
    /// - `Ok(None)` - No book with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Book>, DbErr> {
        let entity = entity::prelude::Book::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Book::from_entity))
    }

    /// Deletes a book by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - The book existed and was deleted
    /// - `Ok(false)` - No book with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Book::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
