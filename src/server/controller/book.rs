use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        book::{BookDto, CreateBookDto},
    },
    server::{
        controller::json_payload, error::AppError, model::book::CreateBookParams,
        service::book::BookService, state::AppState, util::parse::parse_record_id,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

/// Create a new book.
///
/// # Returns
/// - `201 Created` - Successfully created book
/// - `400 Bad Request` - A required field is missing or blank
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/book",
    tag = BOOK_TAG,
    request_body = CreateBookDto,
    responses(
        (status = 201, description = "Successfully created book", body = BookDto),
        (status = 400, description = "Invalid book data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateBookParams::from_dto(json_payload(payload)?)?;

    let book = BookService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(book.into_dto())))
}

/// Get all books.
#[utoipa::path(
    get,
    path = "/books",
    tag = BOOK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved books", body = Vec<BookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books = BookService::new(&state.db).get_all().await?;

    let books: Vec<BookDto> = books.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(books)))
}

/// Get a specific book by ID.
///
/// This is the lookup contract the order service relies on during enrichment: a `404` with
/// kind `not_found` means the book does not exist.
///
/// # Returns
/// - `200 OK` - Book details
/// - `400 Bad Request` - Malformed book ID
/// - `404 Not Found` - No book with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = String, Path, description = "Book ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved book", body = BookDto),
        (status = 400, description = "Malformed book ID", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_record_id(&id)?;

    let book = BookService::new(&state.db).get_by_id(id).await?;

    match book {
        Some(book) => Ok((StatusCode::OK, Json(book.into_dto()))),
        None => Err(AppError::NotFound("Book not found".to_string())),
    }
}

/// Delete a book.
///
/// Orders that reference the book are not touched.
///
/// # Returns
/// - `200 OK` - Book deleted
/// - `400 Bad Request` - Malformed book ID
/// - `404 Not Found` - No book with that ID, including one deleted earlier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = String, Path, description = "Book ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully deleted book", body = MessageDto),
        (status = 400, description = "Malformed book ID", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_record_id(&id)?;

    let deleted = BookService::new(&state.db).delete(id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Deleted successfully".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Book not found".to_string()))
    }
}
