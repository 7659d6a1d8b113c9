use super::*;

/// Tests creating an order.
///
/// Expected: Ok(Order) with references and dates stored as given
#[tokio::test]
async fn creates_order_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member_ref = Uuid::new_v4();
    let book_ref = Uuid::new_v4();

    let repo = OrderRepository::new(db);
    let order = repo
        .create(CreateOrderParams {
            member_ref,
            book_ref,
            initial_date: date(2024, 1, 1),
            delivery_date: date(2024, 1, 15),
        })
        .await?;

    let stored = repo.get_by_id(order.id).await?.unwrap();
    assert_eq!(stored.member_ref, member_ref);
    assert_eq!(stored.book_ref, book_ref);
    assert_eq!(stored.initial_date, date(2024, 1, 1));
    assert_eq!(stored.delivery_date, date(2024, 1, 15));

    Ok(())
}

/// Tests that references are not checked at write time.
///
/// The order table lives alone in this database, so neither reference can resolve.
///
/// Expected: Ok(Order)
#[tokio::test]
async fn accepts_unresolvable_references() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderRepository::new(db)
        .create(CreateOrderParams {
            member_ref: Uuid::new_v4(),
            book_ref: Uuid::new_v4(),
            initial_date: date(2024, 3, 1),
            delivery_date: date(2024, 2, 1),
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}
