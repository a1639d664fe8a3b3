//! Article factory for creating test article entities.

use crate::factory::helpers::{next_id, FACTORY_ACTOR};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// The author must already exist; pass its `user_account` id.
pub struct ArticleFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    user_account_id: i32,
    title: String,
    content: String,
    hashtag: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a, C: ConnectionTrait> ArticleFactory<'a, C> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {id}"`
    /// - content: `"Content {id}"`
    /// - hashtag: `None`
    /// - created_at: now
    pub fn new(db: &'a C, user_account_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_account_id,
            title: format!("Article {}", id),
            content: format!("Content {}", id),
            hashtag: None,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn hashtag(mut self, hashtag: Option<&str>) -> Self {
        self.hashtag = hashtag.map(str::to_string);
        self
    }

    /// Overrides the creation timestamp, for ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the article into the database.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            user_account_id: ActiveValue::Set(self.user_account_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            hashtag: ActiveValue::Set(self.hashtag),
            created_at: ActiveValue::Set(self.created_at),
            created_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            modified_at: ActiveValue::Set(self.created_at),
            modified_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values for the given author.
pub async fn create_article<C: ConnectionTrait>(
    db: &C,
    user_account_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, user_account_id).build().await
}
