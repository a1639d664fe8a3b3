use super::*;

/// Tests attaching a comment to an existing article.
///
/// Expected: Ok(ArticleComment) stamped with the actor
#[tokio::test]
async fn creates_comment_for_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_user_account(db).await?;
    let article = factory::create_article(db, account.id).await?;

    let repo = ArticleCommentRepository::new(db);
    let comment = repo
        .create(
            CreateArticleCommentParam {
                article_id: article.id,
                content: "comment".to_string(),
            },
            &Actor::new("uno").unwrap(),
        )
        .await?;

    assert_eq!(comment.article_id, article.id);
    assert_eq!(comment.content, "comment");
    assert_eq!(comment.audit.created_by, "uno");
    assert_eq!(entity::prelude::ArticleComment::find().count(db).await?, 1);

    Ok(())
}

/// Tests attaching a comment to an article that does not exist.
///
/// Verifies that the foreign key prevents orphaned comments.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_nonexistent_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleCommentRepository::new(db);
    let result = repo
        .create(
            CreateArticleCommentParam {
                article_id: 1,
                content: "comment".to_string(),
            },
            &Actor::new("uno").unwrap(),
        )
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::ArticleComment::find().count(db).await?, 0);

    Ok(())
}
