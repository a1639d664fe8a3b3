use super::*;

/// Tests loading an article with its comments.
///
/// Verifies that every comment attached to the article is returned in
/// insertion order and that comments of other articles are excluded.
///
/// Expected: Ok(Some(ArticleWithComments)) with two comments
#[tokio::test]
async fn loads_comments_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article, comments) =
        factory::helpers::create_article_with_comments(db, 2).await?;
    factory::helpers::create_article_with_comments(db, 3).await?;

    let repo = ArticleRepository::new(db);
    let result = repo.find_with_comments(article.id).await?;

    assert!(result.is_some());
    let with_comments = result.unwrap();
    assert_eq!(with_comments.article.id, article.id);
    assert_eq!(with_comments.comments.len(), 2);
    assert_eq!(with_comments.comments[0].id, comments[0].id);
    assert_eq!(with_comments.comments[1].id, comments[1].id);

    Ok(())
}

/// Tests loading an article that has no comments.
///
/// Expected: Ok(Some(ArticleWithComments)) with an empty comment list
#[tokio::test]
async fn loads_article_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_user_account(db).await?;
    let article = factory::create_article(db, account.id).await?;

    let repo = ArticleRepository::new(db);
    let result = repo.find_with_comments(article.id).await?;

    assert!(result.is_some());
    assert!(result.unwrap().comments.is_empty());

    Ok(())
}

/// Tests loading a nonexistent article with comments.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    assert!(repo.find_with_comments(42).await?.is_none());

    Ok(())
}
