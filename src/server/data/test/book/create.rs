use super::*;

/// Tests creating a book.
///
/// Verifies that the repository stores all four fields and assigns an identifier.
///
/// Expected: Ok(Book) matching the stored row
#[tokio::test]
async fn creates_book_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let book = repo.create(dune()).await?;

    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Herbert");
    assert_eq!(book.isbn, "9780441013593");
    assert_eq!(book.publisher, "Ace");

    let db_book = entity::prelude::Book::find_by_id(book.id).one(db).await?;
    assert!(db_book.is_some());
    assert_eq!(db_book.unwrap().title, "Dune");

    Ok(())
}

/// Tests that every created book gets its own identifier.
///
/// Expected: two distinct IDs for identical payloads
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let first = repo.create(dune()).await?;
    let second = repo.create(dune()).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
