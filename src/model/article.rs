use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{article_comment::ArticleCommentDto, user_account::UserAccountDto};

/// Field an article search is matched against.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchType {
    Title,
    Content,
    /// Author's username.
    Id,
    Nickname,
    Hashtag,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleDto {
    pub id: i32,
    pub user_account: UserAccountDto,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleWithCommentsDto {
    pub id: i32,
    pub user_account: UserAccountDto,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
    pub article_comments: Vec<ArticleCommentDto>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedArticlesDto {
    pub articles: Vec<ArticleDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateArticleDto {
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
}

/// Partial update payload; absent fields are left untouched.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct ArticleUpdateDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub hashtag: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleCountDto {
    pub count: u64,
}
