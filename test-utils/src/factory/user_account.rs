//! User account factory for creating test account entities.

use crate::factory::helpers::{next_id, FACTORY_ACTOR};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test user accounts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_account::UserAccountFactory;
///
/// let account = UserAccountFactory::new(&db)
///     .username("uno")
///     .nickname(Some("Uno"))
///     .build()
///     .await?;
/// ```
pub struct UserAccountFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    username: String,
    password: String,
    email: Option<String>,
    nickname: Option<String>,
    memo: Option<String>,
}

impl<'a, C: ConnectionTrait> UserAccountFactory<'a, C> {
    /// Creates a new UserAccountFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - password: `"password"`
    /// - email: `"user{id}@mail.com"`
    /// - nickname: `"User {id}"`
    /// - memo: `None`
    pub fn new(db: &'a C) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            password: "password".to_string(),
            email: Some(format!("user{}@mail.com", id)),
            nickname: Some(format!("User {}", id)),
            memo: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: Option<&str>) -> Self {
        self.email = email.map(str::to_string);
        self
    }

    pub fn nickname(mut self, nickname: Option<&str>) -> Self {
        self.nickname = nickname.map(str::to_string);
        self
    }

    pub fn memo(mut self, memo: Option<&str>) -> Self {
        self.memo = memo.map(str::to_string);
        self
    }

    /// Builds and inserts the user account into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_account::Model)` - Created account
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_account::Model, DbErr> {
        let now = Utc::now();
        entity::user_account::ActiveModel {
            username: ActiveValue::Set(self.username),
            password: ActiveValue::Set(self.password),
            email: ActiveValue::Set(self.email),
            nickname: ActiveValue::Set(self.nickname),
            memo: ActiveValue::Set(self.memo),
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

/// Creates a user account with default values.
///
/// Shorthand for `UserAccountFactory::new(db).build().await`.
pub async fn create_user_account<C: ConnectionTrait>(
    db: &C,
) -> Result<entity::user_account::Model, DbErr> {
    UserAccountFactory::new(db).build().await
}
