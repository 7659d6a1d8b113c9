use super::*;

/// Tests creating a member with a phone number.
///
/// Expected: Ok(Member) with all fields stored
#[tokio::test]
async fn creates_member_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(CreateMemberParams {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            phone: Some("555-0100".to_string()),
        })
        .await?;

    let stored = repo.get_by_id(member.id).await?.unwrap();
    assert_eq!(stored.name, "Alice");
    assert_eq!(stored.email, "a@x.com");
    assert_eq!(stored.phone.as_deref(), Some("555-0100"));

    Ok(())
}

/// Tests creating a member without a phone number.
///
/// Expected: Ok(Member) with phone None
#[tokio::test]
async fn creates_member_without_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = MemberRepository::new(db)
        .create(CreateMemberParams {
            name: "Bob".to_string(),
            email: "b@x.com".to_string(),
            phone: None,
        })
        .await?;

    assert!(member.phone.is_none());

    Ok(())
}
