use super::*;

/// Tests reading a member inserted by the factory.
///
/// Expected: Ok(Some(Member)) with matching fields
#[tokio::test]
async fn gets_existing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::MemberFactory::new(db)
        .name("Alice")
        .email("a@x.com")
        .build()
        .await?;

    let member = MemberRepository::new(db).get_by_id(created.id).await?;

    assert!(member.is_some());
    let member = member.unwrap();
    assert_eq!(member.name, "Alice");
    assert_eq!(member.email, "a@x.com");

    Ok(())
}

/// Tests querying a well-formed ID with no backing row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberRepository::new(db).get_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}
