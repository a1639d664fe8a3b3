use super::*;

/// Tests deleting an article with two comments.
///
/// Expected: article count drops by one, comment count by two, and the article can no
/// longer be read
#[tokio::test]
async fn deletes_article_and_comments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, article, _) = factory::helpers::create_article_with_comments(db, 2).await?;
    let other = factory::create_article(db, account.id).await?;
    factory::create_article_comment(db, other.id).await?;

    let articles_before = entity::prelude::Article::find().count(db).await?;
    let comments_before = entity::prelude::ArticleComment::find().count(db).await?;

    let service = ArticleService::new(db);
    service.delete_article(article.id).await?;

    assert_eq!(
        entity::prelude::Article::find().count(db).await?,
        articles_before - 1
    );
    assert_eq!(
        entity::prelude::ArticleComment::find().count(db).await?,
        comments_before - 2
    );
    assert!(matches!(
        service.get_article(article.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting the same article twice.
///
/// Expected: both calls return Ok
#[tokio::test]
async fn second_delete_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article, _) = factory::helpers::create_article_with_comments(db, 1).await?;

    let service = ArticleService::new(db);
    service.delete_article(article.id).await?;
    service.delete_article(article.id).await?;

    assert_eq!(entity::prelude::Article::find().count(db).await?, 0);

    Ok(())
}
