use super::*;

/// Tests listing orders.
///
/// Expected: every inserted order is returned
#[tokio::test]
async fn lists_all_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_order(db, Uuid::new_v4(), Uuid::new_v4()).await?;
    }

    let orders = OrderRepository::new(db).get_all().await?;

    assert_eq!(orders.len(), 3);

    Ok(())
}
