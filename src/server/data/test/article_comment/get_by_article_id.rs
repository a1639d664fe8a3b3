use super::*;

/// Tests listing the comments of a single article.
///
/// Expected: Ok with only that article's comments, in insertion order
#[tokio::test]
async fn returns_comments_of_article_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article, comments) =
        factory::helpers::create_article_with_comments(db, 3).await?;
    factory::helpers::create_article_with_comments(db, 1).await?;

    let repo = ArticleCommentRepository::new(db);
    let result = repo.get_by_article_id(article.id).await?;

    let expected: Vec<i32> = comments.iter().map(|c| c.id).collect();
    let actual: Vec<i32> = result.iter().map(|c| c.id).collect();
    assert_eq!(actual, expected);

    Ok(())
}

/// Tests listing comments for an article without any.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_article_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_user_account(db).await?;
    let article = factory::create_article(db, account.id).await?;

    let repo = ArticleCommentRepository::new(db);

    assert!(repo.get_by_article_id(article.id).await?.is_empty());

    Ok(())
}
