use super::*;

/// Tests reading an order inserted by the factory.
///
/// Expected: Ok(Some(Order)) with the factory's default 14 day loan
#[tokio::test]
async fn gets_existing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member_ref = Uuid::new_v4();
    let book_ref = Uuid::new_v4();
    let created = factory::create_order(db, member_ref, book_ref).await?;

    let order = OrderRepository::new(db).get_by_id(created.id).await?.unwrap();

    assert_eq!(order.member_ref, member_ref);
    assert_eq!(order.book_ref, book_ref);
    assert_eq!(order.initial_date, date(2024, 1, 1));
    assert_eq!(order.delivery_date, date(2024, 1, 15));

    Ok(())
}

/// Tests querying a well-formed ID with no backing row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderRepository::new(db).get_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}
