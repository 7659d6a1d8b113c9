//! Book domain model and creation parameters.

use uuid::Uuid;

use crate::{
    model::book::{BookDto, CreateBookDto},
    server::{error::AppError, util::parse::required_text},
};

/// A book record as held by the book store.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publisher: String,
}

impl Book {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author: entity.author,
            isbn: entity.isbn,
            publisher: entity.publisher,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            publisher: self.publisher,
        }
    }
}

/// Validated input for creating a book.
#[derive(Debug, Clone)]
pub struct CreateBookParams {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publisher: String,
}

impl CreateBookParams {
    /// Validates a creation payload.
    ///
    /// # Returns
    /// - `Ok(CreateBookParams)` - All four fields present and non-blank (trimmed)
    /// - `Err(AppError::Validation)` - The first missing or blank field
    pub fn from_dto(dto: CreateBookDto) -> Result<Self, AppError> {
        Ok(Self {
            title: required_text("title", dto.title)?,
            author: required_text("author", dto.author)?,
            isbn: required_text("isbn", dto.isbn)?,
            publisher: required_text("publisher", dto.publisher)?,
        })
    }
}
