use super::*;

/// Tests listing books.
///
/// Expected: every inserted book is returned
#[tokio::test]
async fn lists_all_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_book(db).await?;
    let second = factory::book::BookFactory::new(db)
        .title("Children of Dune")
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let books = repo.get_all().await?;

    assert_eq!(books.len(), 2);
    assert!(books.iter().any(|b| b.id == first.id));
    assert!(books
        .iter()
        .any(|b| b.id == second.id && b.title == "Children of Dune"));

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_list_without_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let books = BookRepository::new(db).get_all().await?;

    assert!(books.is_empty());

    Ok(())
}
