//! User account domain models and parameters.

use crate::{
    model::user_account::UserAccountDto,
    server::model::audit::AuditMetadata,
};

/// Account that authors articles.
///
/// The password is an opaque credential; it is stored as given and never included in
/// transfer objects.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub memo: Option<String>,
    pub audit: AuditMetadata,
}

impl UserAccount {
    /// Converts an entity model to a user account domain model at the repository boundary.
    pub fn from_entity(entity: entity::user_account::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password: entity.password,
            email: entity.email,
            nickname: entity.nickname,
            memo: entity.memo,
            audit: AuditMetadata {
                created_at: entity.created_at,
                created_by: entity.created_by,
                modified_at: entity.modified_at,
                modified_by: entity.modified_by,
            },
        }
    }

    /// Converts the user account domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserAccountDto {
        UserAccountDto {
            id: self.id,
            username: self.username,
            email: self.email,
            nickname: self.nickname,
            memo: self.memo,
            created_at: self.audit.created_at,
            created_by: self.audit.created_by,
            modified_at: self.audit.modified_at,
            modified_by: self.audit.modified_by,
        }
    }
}

/// Parameters for registering a new user account.
#[derive(Debug, Clone)]
pub struct CreateUserAccountParam {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub memo: Option<String>,
}

impl CreateUserAccountParam {
    pub fn from_dto(dto: crate::model::user_account::CreateUserAccountDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
            email: dto.email,
            nickname: dto.nickname,
            memo: dto.memo,
        }
    }
}
