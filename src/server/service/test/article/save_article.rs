use super::*;

/// Tests saving a new article.
///
/// Expected: Ok with the article stored and stamped with the actor
#[tokio::test]
async fn saves_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_user_account(db).await?;
    let before = entity::prelude::Article::find().count(db).await?;

    let service = ArticleService::new(db);
    let article = service
        .save_article(
            CreateArticleParam {
                user_account_id: account.id,
                title: "title".to_string(),
                content: "content".to_string(),
                hashtag: Some("#spring".to_string()),
            },
            &actor(),
        )
        .await?;

    let after = entity::prelude::Article::find().count(db).await?;
    assert_eq!(after, before + 1);
    assert_eq!(article.user_account.id, account.id);
    assert_eq!(article.hashtag.as_deref(), Some("#spring"));
    assert_eq!(article.audit.created_by, "uno");
    assert_eq!(article.audit.modified_by, "uno");

    Ok(())
}

/// Tests saving an article for an author that does not exist.
///
/// Expected: Err(AppError::DbErr) and nothing stored
#[tokio::test]
async fn fails_for_unknown_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ArticleService::new(db);
    let result = service
        .save_article(
            CreateArticleParam {
                user_account_id: 999,
                title: "title".to_string(),
                content: "content".to_string(),
                hashtag: None,
            },
            &actor(),
        )
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(entity::prelude::Article::find().count(db).await?, 0);

    Ok(())
}
