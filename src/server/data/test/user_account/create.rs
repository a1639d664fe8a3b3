use super::*;

/// Tests creating a user account.
///
/// Verifies that the repository persists every field and stamps the audit
/// columns with the acting user.
///
/// Expected: Ok with account created
#[tokio::test]
async fn creates_user_account_with_audit_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserAccountRepository::new(db);
    let actor = Actor::new("admin").unwrap();
    let account = repo.create(create_param("uno"), &actor).await?;

    assert_eq!(account.username, "uno");
    assert_eq!(account.email.as_deref(), Some("uno@mail.com"));
    assert_eq!(account.nickname.as_deref(), Some("Uno"));
    assert_eq!(account.audit.created_by, "admin");
    assert_eq!(account.audit.modified_by, "admin");

    let stored = repo.find_by_username("uno").await?;
    assert_eq!(stored, Some(account));

    Ok(())
}

/// Tests creating an account with a username that is already taken.
///
/// Verifies that the unique index rejects the insert with a constraint
/// violation rather than creating a second row.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserAccountRepository::new(db);
    let actor = Actor::new("admin").unwrap();
    repo.create(create_param("uno"), &actor).await?;

    let result = repo.create(create_param("uno"), &actor).await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
