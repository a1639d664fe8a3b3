//! Article comment service for business logic.
//!
//! Both operations that need a parent article treat a missing parent as a recoverable
//! condition: a warning is logged and the caller receives a successful no-op.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, article_comment::ArticleCommentRepository},
    error::AppError,
    model::{
        article_comment::{ArticleComment, CreateArticleCommentParam},
        audit::Actor,
    },
};

pub struct ArticleCommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleCommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the comments of an article in insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<ArticleComment>)` - Comments of the article; empty when the article does
    ///   not exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn search_article_comment(
        &self,
        article_id: i32,
    ) -> Result<Vec<ArticleComment>, AppError> {
        let article_repo = ArticleRepository::new(self.db);

        if !article_repo.exists(article_id).await? {
            tracing::warn!(
                "Comment search skipped, article {} not found",
                article_id
            );
            return Ok(Vec::new());
        }

        let comments = ArticleCommentRepository::new(self.db)
            .get_by_article_id(article_id)
            .await?;

        Ok(comments)
    }

    /// Attaches a new comment to its parent article.
    ///
    /// # Returns
    /// - `Ok(())` - Comment saved, or skipped because the parent article does not exist
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn save_article_comment(
        &self,
        param: CreateArticleCommentParam,
        actor: &Actor,
    ) -> Result<(), AppError> {
        let article_repo = ArticleRepository::new(self.db);

        if !article_repo.exists(param.article_id).await? {
            tracing::warn!(
                "Comment save skipped, article {} not found",
                param.article_id
            );
            return Ok(());
        }

        ArticleCommentRepository::new(self.db)
            .create(param, actor)
            .await?;

        Ok(())
    }

    /// Deletes a comment by id. Deleting an id that does not exist is a no-op.
    pub async fn delete_article_comment(&self, comment_id: i32) -> Result<(), AppError> {
        ArticleCommentRepository::new(self.db)
            .delete(comment_id)
            .await?;

        Ok(())
    }
}
