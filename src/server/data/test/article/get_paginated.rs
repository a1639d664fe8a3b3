use super::*;

/// Tests paging through all articles without a filter.
///
/// Verifies page sizes, the total count, and newest-first ordering.
///
/// Expected: Ok with correct page of articles and total count
#[tokio::test]
async fn returns_newest_first_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_user_account(db).await?;
    let base = Utc::now();
    let mut ids = Vec::new();
    for i in 0..5 {
        let article = factory::article::ArticleFactory::new(db, account.id)
            .created_at(base + Duration::minutes(i))
            .build()
            .await?;
        ids.push(article.id);
    }

    let repo = ArticleRepository::new(db);

    let (first, total) = repo.get_paginated(None, PageRequest::new(0, 2)).await?;
    assert_eq!(total, 5);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].id, ids[4]);
    assert_eq!(first[1].id, ids[3]);

    let (last, _) = repo.get_paginated(None, PageRequest::new(2, 2)).await?;
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].id, ids[0]);

    Ok(())
}

/// Tests paging with no articles stored.
///
/// Expected: Ok with empty vector and zero total
#[tokio::test]
async fn returns_empty_for_no_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);
    let (articles, total) = repo.get_paginated(None, PageRequest::new(0, 10)).await?;

    assert!(articles.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests that each filter only matches on its own field.
///
/// Seeds two authors whose articles differ in every searchable field, then
/// checks that each filter selects exactly the expected article.
///
/// Expected: Ok with one matching article per filter
#[tokio::test]
async fn filters_by_each_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uno = factory::user_account::UserAccountFactory::new(db)
        .username("uno")
        .nickname(Some("Uno"))
        .build()
        .await?;
    let dos = factory::user_account::UserAccountFactory::new(db)
        .username("dos")
        .nickname(Some("Dos"))
        .build()
        .await?;

    let spring = factory::article::ArticleFactory::new(db, uno.id)
        .title("spring boot guide")
        .content("dependency injection")
        .hashtag(Some("#spring"))
        .build()
        .await?;
    let rust = factory::article::ArticleFactory::new(db, dos.id)
        .title("rust ownership")
        .content("borrow checker")
        .hashtag(Some("#rust"))
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let page = PageRequest::new(0, 10);

    let cases = [
        (ArticleFilter::TitleContains("boot".to_string()), spring.id),
        (ArticleFilter::ContentContains("borrow".to_string()), rust.id),
        (ArticleFilter::UsernameContains("un".to_string()), spring.id),
        (ArticleFilter::NicknameContains("Dos".to_string()), rust.id),
        (ArticleFilter::HashtagEquals("#rust".to_string()), rust.id),
    ];

    for (filter, expected_id) in cases {
        let (articles, total) = repo.get_paginated(Some(&filter), page).await?;
        assert_eq!(total, 1, "filter {:?}", filter);
        assert_eq!(articles[0].id, expected_id, "filter {:?}", filter);
    }

    Ok(())
}

/// Tests that the hashtag filter requires an exact match.
///
/// Expected: Ok with no articles for a partial hashtag
#[tokio::test]
async fn hashtag_filter_does_not_match_substrings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_user_account(db).await?;
    factory::article::ArticleFactory::new(db, account.id)
        .hashtag(Some("#springboot"))
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let filter = ArticleFilter::HashtagEquals("#spring".to_string());
    let (articles, total) = repo
        .get_paginated(Some(&filter), PageRequest::new(0, 10))
        .await?;

    assert!(articles.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests that an empty keyword is applied literally.
///
/// A contains-filter with an empty keyword matches every article, while the
/// hashtag filter with an empty keyword only matches an empty hashtag.
///
/// Expected: Ok with all articles for title, none for hashtag
#[tokio::test]
async fn empty_keyword_is_literal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_user_account(db).await?;
    factory::article::ArticleFactory::new(db, account.id)
        .hashtag(Some("#spring"))
        .build()
        .await?;
    factory::create_article(db, account.id).await?;

    let repo = ArticleRepository::new(db);
    let page = PageRequest::new(0, 10);

    let title = ArticleFilter::TitleContains(String::new());
    let (_, title_total) = repo.get_paginated(Some(&title), page).await?;
    assert_eq!(title_total, 2);

    let hashtag = ArticleFilter::HashtagEquals(String::new());
    let (_, hashtag_total) = repo.get_paginated(Some(&hashtag), page).await?;
    assert_eq!(hashtag_total, 0);

    Ok(())
}

/// Tests that `%`, `_` and `\` in a keyword are matched as plain characters.
///
/// Expected: Ok with only articles containing the literal characters
#[tokio::test]
async fn like_metacharacters_match_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let plain = factory::user_account::UserAccountFactory::new(db)
        .nickname(Some("plain"))
        .build()
        .await?;
    let marked = factory::user_account::UserAccountFactory::new(db)
        .nickname(Some("under_score"))
        .build()
        .await?;
    factory::article::ArticleFactory::new(db, plain.id)
        .title("spring boot")
        .build()
        .await?;
    factory::article::ArticleFactory::new(db, plain.id)
        .title("rust")
        .build()
        .await?;
    let literal = factory::article::ArticleFactory::new(db, marked.id)
        .title("100% rust_lang \\o/")
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let page = PageRequest::new(0, 10);

    for keyword in ["%", "_", "\\", "t_l", "0%"] {
        let filter = ArticleFilter::TitleContains(keyword.to_string());
        let (articles, total) = repo.get_paginated(Some(&filter), page).await?;
        assert_eq!(total, 1, "keyword {:?}", keyword);
        assert_eq!(articles[0].id, literal.id);
    }

    let filter = ArticleFilter::TitleContains("r_st".to_string());
    let (_, total) = repo.get_paginated(Some(&filter), page).await?;
    assert_eq!(total, 0);

    let filter = ArticleFilter::NicknameContains("_".to_string());
    let (articles, total) = repo.get_paginated(Some(&filter), page).await?;
    assert_eq!(total, 1);
    assert_eq!(articles[0].id, literal.id);

    Ok(())
}

/// Tests a page number whose offset exceeds the SQL integer range.
///
/// Expected: Ok with an empty page and the full total
#[tokio::test]
async fn out_of_range_page_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_user_account(db).await?;
    factory::create_article(db, account.id).await?;
    factory::create_article(db, account.id).await?;

    let repo = ArticleRepository::new(db);
    let (articles, total) = repo
        .get_paginated(None, PageRequest::new(u64::MAX / 2, 10))
        .await?;

    assert!(articles.is_empty());
    assert_eq!(total, 2);

    Ok(())
}
