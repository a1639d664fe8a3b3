//! User account service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user_account::UserAccountRepository,
    error::AppError,
    model::{
        audit::Actor,
        user_account::{CreateUserAccountParam, UserAccount},
    },
};

/// Service providing business logic for user accounts.
pub struct UserAccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserAccountService<'a> {
    /// Creates a new UserAccountService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account.
    ///
    /// Duplicate usernames are not checked here; the unique index rejects them and the
    /// database error is propagated unchanged.
    ///
    /// # Returns
    /// - `Ok(UserAccount)` - The created account
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate username
    pub async fn save_user_account(
        &self,
        param: CreateUserAccountParam,
        actor: &Actor,
    ) -> Result<UserAccount, AppError> {
        let repo = UserAccountRepository::new(self.db);

        let account = repo.create(param, actor).await?;

        Ok(account)
    }

    /// Gets a user account by username.
    ///
    /// # Returns
    /// - `Ok(UserAccount)` - Account found
    /// - `Err(AppError::NotFound)` - No account with that username
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user_account(&self, username: &str) -> Result<UserAccount, AppError> {
        let repo = UserAccountRepository::new(self.db);

        repo.find_by_username(username).await?.ok_or_else(|| {
            AppError::NotFound(format!("User account not found - username: {}", username))
        })
    }
}
