//! Article service for business logic.
//!
//! This module provides the `ArticleService` for searching, reading, creating, updating and
//! deleting articles. Reads of a missing article surface `AppError::NotFound`; updates of a
//! missing article are logged and skipped.

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::article::SearchType,
    server::{
        data::{article::ArticleRepository, article_comment::ArticleCommentRepository},
        error::AppError,
        model::{
            article::{
                Article, ArticleFilter, ArticleWithComments, CreateArticleParam,
                UpdateArticleParam,
            },
            audit::Actor,
            page::{Page, PageRequest},
        },
    },
};

/// Service providing business logic for articles.
pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    /// Creates a new ArticleService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ArticleService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches articles, newest first.
    ///
    /// When either the search type or the keyword is absent every article is paged without
    /// a filter. Otherwise the keyword is matched against the field selected by the search
    /// type. An empty keyword is applied as given.
    ///
    /// # Arguments
    /// - `search_type` - Field to match against
    /// - `keyword` - Value to match
    /// - `page` - Zero-indexed page and page size
    ///
    /// # Returns
    /// - `Ok(Page<Article>)` - Matching articles for the requested page, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn search_articles(
        &self,
        search_type: Option<SearchType>,
        keyword: Option<String>,
        page: PageRequest,
    ) -> Result<Page<Article>, AppError> {
        let repo = ArticleRepository::new(self.db);

        let filter = ArticleFilter::from_search(search_type, keyword);
        let (articles, total) = repo.get_paginated(filter.as_ref(), page).await?;

        Ok(Page::new(articles, total, page))
    }

    /// Gets an article with its author and all comments.
    ///
    /// # Returns
    /// - `Ok(ArticleWithComments)` - The article and its comments in insertion order
    /// - `Err(AppError::NotFound)` - No article with that id; the message carries the id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_article(&self, article_id: i32) -> Result<ArticleWithComments, AppError> {
        let repo = ArticleRepository::new(self.db);

        repo.find_with_comments(article_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Article not found - articleId: {}", article_id))
        })
    }

    /// Creates a new article authored by the account in `param`.
    ///
    /// # Returns
    /// - `Ok(Article)` - The created article
    /// - `Err(AppError::DbErr)` - Database error, including an unknown author
    pub async fn save_article(
        &self,
        param: CreateArticleParam,
        actor: &Actor,
    ) -> Result<Article, AppError> {
        let repo = ArticleRepository::new(self.db);

        let article = repo.create(param, actor).await?;

        Ok(article)
    }

    /// Overwrites the present title, content and hashtag of an article.
    ///
    /// A missing target article is not an error: a warning is logged and the call returns
    /// normally without touching the database.
    ///
    /// # Returns
    /// - `Ok(())` - Article updated, or no article with that id
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn update_article(
        &self,
        param: UpdateArticleParam,
        actor: &Actor,
    ) -> Result<(), AppError> {
        let repo = ArticleRepository::new(self.db);

        let article_id = param.id;
        match repo.update(param, actor).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotFound(msg)) => {
                tracing::warn!(
                    "Article update skipped, article {} not found: {}",
                    article_id,
                    msg
                );
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes an article together with all of its comments.
    ///
    /// The comments are removed first, then the article, inside a single transaction.
    /// Deleting an id that does not exist is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - Article and comments removed, or nothing to remove
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn delete_article(&self, article_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let removed_comments = ArticleCommentRepository::new(&txn)
            .delete_by_article_id(article_id)
            .await?;
        let removed_articles = ArticleRepository::new(&txn).delete(article_id).await?;

        txn.commit().await?;

        tracing::debug!(
            "Deleted article {} ({} rows) with {} comments",
            article_id,
            removed_articles,
            removed_comments
        );

        Ok(())
    }

    /// Counts all articles.
    pub async fn get_article_count(&self) -> Result<u64, AppError> {
        let repo = ArticleRepository::new(self.db);

        Ok(repo.count().await?)
    }
}
