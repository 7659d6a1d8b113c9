use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::book::BookRepository,
    error::AppError,
    model::book::{Book, CreateBookParams},
};

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new book
    pub async fn create(&self, params: CreateBookParams) -> Result<Book, AppError> {
        let repo = BookRepository::new(self.db);

        let book = repo.create(params).await?;

        tracing::debug!("Created book {}", book.id);

        Ok(book)
    }

    /// Gets every book
    pub async fn get_all(&self) -> Result<Vec<Book>, AppError> {
        let repo = BookRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific book by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Book>, AppError> {
        let repo = BookRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Deletes a book
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let repo = BookRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        if deleted {
            tracing::debug!("Deleted book {}", id);
        }

        Ok(deleted)
    }
}
