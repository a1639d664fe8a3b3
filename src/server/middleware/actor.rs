use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user_account::UserAccountRepository,
    error::{actor::ActorError, AppError},
    model::{audit::Actor, user_account::UserAccount},
};

/// Request header naming the user on whose behalf a write is made.
pub const ACTOR_HEADER: &str = "x-board-actor";

pub struct ActorGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> ActorGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Reads the actor from the request headers.
    ///
    /// # Returns
    /// - `Ok(Actor)` - Trimmed, non-blank username from the actor header
    /// - `Err(AppError::ActorErr)` - Header missing, blank or not valid UTF-8
    pub fn require(&self) -> Result<Actor, AppError> {
        let Some(value) = self.headers.get(ACTOR_HEADER) else {
            return Err(ActorError::MissingActor.into());
        };

        let Some(actor) = value.to_str().ok().and_then(Actor::new) else {
            return Err(ActorError::MissingActor.into());
        };

        Ok(actor)
    }

    /// Reads the actor and resolves the user account it names.
    ///
    /// # Returns
    /// - `Ok((Actor, UserAccount))` - Actor and its account
    /// - `Err(AppError::ActorErr)` - Header missing or naming an unknown username
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn require_account(&self) -> Result<(Actor, UserAccount), AppError> {
        let actor = self.require()?;

        let Some(account) = UserAccountRepository::new(self.db)
            .find_by_username(actor.username())
            .await?
        else {
            return Err(ActorError::UnknownAccount(actor.username().to_string()).into());
        };

        Ok((actor, account))
    }
}
