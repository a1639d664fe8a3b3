use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public projection of a user account. The password never leaves the server.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserAccountDto {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateUserAccountDto {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub memo: Option<String>,
}
