use super::*;

/// Tests that a created book can be read back unchanged.
///
/// Expected: Ok(Some(Book)) equal on all fields
#[tokio::test]
async fn gets_created_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let created = repo.create(dune()).await?;

    let found = repo.get_by_id(created.id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests querying a well-formed ID with no backing row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_book(db).await?;

    let repo = BookRepository::new(db);
    let result = repo.get_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}
