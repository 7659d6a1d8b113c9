use super::*;

/// Tests deleting a member and then reading it back.
///
/// Expected: Ok(true), subsequent lookup Ok(None), second delete Ok(false)
#[tokio::test]
async fn deletes_member_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);

    assert!(repo.delete(member.id).await?);
    assert!(repo.get_by_id(member.id).await?.is_none());
    assert!(!repo.delete(member.id).await?);

    Ok(())
}
