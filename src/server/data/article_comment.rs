//! Article comment data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{
    article_comment::{ArticleComment, CreateArticleCommentParam},
    audit::Actor,
};

pub struct ArticleCommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArticleCommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every comment of an article in insertion order
    pub async fn get_by_article_id(&self, article_id: i32) -> Result<Vec<ArticleComment>, DbErr> {
        let comments = entity::prelude::ArticleComment::find()
            .filter(entity::article_comment::Column::ArticleId.eq(article_id))
            .order_by_asc(entity::article_comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(comments.into_iter().map(ArticleComment::from_entity).collect())
    }

    /// Inserts a comment under its parent article.
    ///
    /// The parent must exist; a missing parent fails the foreign key constraint.
    pub async fn create(
        &self,
        param: CreateArticleCommentParam,
        actor: &Actor,
    ) -> Result<ArticleComment, DbErr> {
        let now = Utc::now();

        let comment = entity::article_comment::ActiveModel {
            article_id: ActiveValue::Set(param.article_id),
            content: ActiveValue::Set(param.content),
            created_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(actor.username().to_string()),
            modified_at: ActiveValue::Set(now),
            modified_by: ActiveValue::Set(actor.username().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ArticleComment::from_entity(comment))
    }

    /// Deletes a comment by id, returning the number of rows removed
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ArticleComment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every comment of an article, returning the number of rows removed
    pub async fn delete_by_article_id(&self, article_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ArticleComment::delete_many()
            .filter(entity::article_comment::Column::ArticleId.eq(article_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
