use super::*;

/// Tests resolving the actor's account.
///
/// Expected: Ok with the actor and the matching account
#[tokio::test]
async fn resolves_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::user_account::UserAccountFactory::new(db)
        .username("uno")
        .build()
        .await?;
    let headers = headers_with_actor("uno");

    let (actor, found) = ActorGuard::new(db, &headers).require_account().await?;

    assert_eq!(actor.username(), "uno");
    assert_eq!(found.id, account.id);

    Ok(())
}

/// Tests an actor naming a username without an account.
///
/// Expected: Err(ActorError::UnknownAccount)
#[tokio::test]
async fn fails_for_unknown_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = headers_with_actor("ghost");

    let result = ActorGuard::new(db, &headers).require_account().await;

    match result {
        Err(AppError::ActorErr(ActorError::UnknownAccount(name))) => assert_eq!(name, "ghost"),
        other => panic!("expected UnknownAccount, got {:?}", other.map(|_| ())),
    }

    Ok(())
}
