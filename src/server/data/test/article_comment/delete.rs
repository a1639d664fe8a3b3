use super::*;

/// Tests deleting a single comment.
///
/// Expected: Ok(1) with the sibling comment left in place
#[tokio::test]
async fn deletes_single_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article, comments) =
        factory::helpers::create_article_with_comments(db, 2).await?;

    let repo = ArticleCommentRepository::new(db);

    assert_eq!(repo.delete(comments[0].id).await?, 1);
    let remaining = repo.get_by_article_id(article.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, comments[1].id);

    Ok(())
}

/// Tests deleting every comment of one article.
///
/// Expected: Ok with the article's comments removed and others kept
#[tokio::test]
async fn deletes_all_comments_of_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article, _) = factory::helpers::create_article_with_comments(db, 2).await?;
    factory::helpers::create_article_with_comments(db, 1).await?;

    let repo = ArticleCommentRepository::new(db);

    assert_eq!(repo.delete_by_article_id(article.id).await?, 2);
    assert_eq!(entity::prelude::ArticleComment::find().count(db).await?, 1);

    Ok(())
}
