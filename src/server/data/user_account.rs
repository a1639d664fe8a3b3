//! User account data repository for database operations.
//!
//! This module provides the `UserAccountRepository` for creating and looking up accounts.
//! Username uniqueness is enforced by a unique index; violations surface as `DbErr`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::{
    audit::Actor,
    user_account::{CreateUserAccountParam, UserAccount},
};

/// Repository providing database operations for user accounts.
pub struct UserAccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserAccountRepository<'a, C> {
    /// Creates a new UserAccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserAccountRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user account stamped with the acting user.
    ///
    /// # Arguments
    /// - `param` - Account fields
    /// - `actor` - User recorded in the audit columns
    ///
    /// # Returns
    /// - `Ok(UserAccount)` - The created account
    /// - `Err(DbErr)` - Database error, including a unique violation on `username`
    pub async fn create(
        &self,
        param: CreateUserAccountParam,
        actor: &Actor,
    ) -> Result<UserAccount, DbErr> {
        let now = Utc::now();

        let account = entity::user_account::ActiveModel {
            username: ActiveValue::Set(param.username),
            password: ActiveValue::Set(param.password),
            email: ActiveValue::Set(param.email),
            nickname: ActiveValue::Set(param.nickname),
            memo: ActiveValue::Set(param.memo),
            created_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(actor.username().to_string()),
            modified_at: ActiveValue::Set(now),
            modified_by: ActiveValue::Set(actor.username().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(UserAccount::from_entity(account))
    }

    /// Finds a user account by its unique username.
    ///
    /// # Returns
    /// - `Ok(Some(UserAccount))` - Account found
    /// - `Ok(None)` - No account with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DbErr> {
        let account = entity::prelude::UserAccount::find()
            .filter(entity::user_account::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(account.map(UserAccount::from_entity))
    }
}
