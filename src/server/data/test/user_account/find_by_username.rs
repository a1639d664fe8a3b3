use super::*;

/// Tests finding an existing account by username.
///
/// Expected: Ok(Some(UserAccount))
#[tokio::test]
async fn finds_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user_account::UserAccountFactory::new(db)
        .username("uno")
        .build()
        .await?;

    let repo = UserAccountRepository::new(db);
    let result = repo.find_by_username("uno").await?;

    assert!(result.is_some());
    assert_eq!(result.unwrap().id, created.id);

    Ok(())
}

/// Tests finding an account that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_account(db).await?;

    let repo = UserAccountRepository::new(db);
    let result = repo.find_by_username("nobody").await?;

    assert!(result.is_none());

    Ok(())
}
