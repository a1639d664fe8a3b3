//! Article comment factory for creating test comment entities.

use crate::factory::helpers::{next_id, FACTORY_ACTOR};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test comments attached to an existing article.
pub struct ArticleCommentFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    article_id: i32,
    content: String,
}

impl<'a, C: ConnectionTrait> ArticleCommentFactory<'a, C> {
    /// Creates a new ArticleCommentFactory with content `"Comment {id}"`.
    pub fn new(db: &'a C, article_id: i32) -> Self {
        Self {
            db,
            article_id,
            content: format!("Comment {}", next_id()),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds and inserts the comment into the database.
    ///
    /// # Returns
    /// - `Ok(entity::article_comment::Model)` - Created comment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::article_comment::Model, DbErr> {
        let now = Utc::now();
        entity::article_comment::ActiveModel {
            article_id: ActiveValue::Set(self.article_id),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            modified_at: ActiveValue::Set(now),
            modified_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default content on the given article.
pub async fn create_article_comment<C: ConnectionTrait>(
    db: &C,
    article_id: i32,
) -> Result<entity::article_comment::Model, DbErr> {
    ArticleCommentFactory::new(db, article_id).build().await
}
