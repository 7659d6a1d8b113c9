use super::*;

/// Tests deleting a book by ID.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_book_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;

    let repo = BookRepository::new(db);
    let deleted = repo.delete(book.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(book.id).await?.is_none());

    Ok(())
}

/// Tests deleting the same book twice.
///
/// The second delete finds nothing, reported as `false` rather than an error.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;

    let repo = BookRepository::new(db);

    assert!(repo.delete(book.id).await?);
    assert!(!repo.delete(book.id).await?);

    Ok(())
}

/// Tests that deleting one book leaves the others in place.
///
/// Expected: only the targeted row is removed
#[tokio::test]
async fn deletes_only_target_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_book(db).await?;
    let other = factory::create_book(db).await?;

    BookRepository::new(db).delete(target.id).await?;

    let remaining = entity::prelude::Book::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other.id);

    Ok(())
}
