//! Article domain models and parameters.
//!
//! Provides the article read models returned by the service layer, the parameter types for
//! creating and partially updating articles, and the search filter resolved from a
//! `(SearchType, keyword)` pair.

use crate::{
    model::article::{
        ArticleDto, ArticleUpdateDto, ArticleWithCommentsDto, CreateArticleDto,
        PaginatedArticlesDto, SearchType,
    },
    server::model::{
        article_comment::ArticleComment, audit::AuditMetadata, page::Page,
        user_account::UserAccount,
    },
};

/// Article together with its author.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub user_account: UserAccount,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
    pub audit: AuditMetadata,
}

impl Article {
    /// Converts an article entity and its author entity into the domain model.
    pub fn from_entity(
        entity: entity::article::Model,
        author: entity::user_account::Model,
    ) -> Self {
        Self {
            id: entity.id,
            user_account: UserAccount::from_entity(author),
            title: entity.title,
            content: entity.content,
            hashtag: entity.hashtag,
            audit: AuditMetadata {
                created_at: entity.created_at,
                created_by: entity.created_by,
                modified_at: entity.modified_at,
                modified_by: entity.modified_by,
            },
        }
    }

    /// Converts the article domain model to a DTO for API responses.
    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id: self.id,
            user_account: self.user_account.into_dto(),
            title: self.title,
            content: self.content,
            hashtag: self.hashtag,
            created_at: self.audit.created_at,
            created_by: self.audit.created_by,
            modified_at: self.audit.modified_at,
            modified_by: self.audit.modified_by,
        }
    }
}

/// Article together with its author and every comment, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleWithComments {
    pub article: Article,
    pub comments: Vec<ArticleComment>,
}

impl ArticleWithComments {
    /// Converts the article and its comments to a DTO for API responses.
    pub fn into_dto(self) -> ArticleWithCommentsDto {
        let article = self.article;

        ArticleWithCommentsDto {
            id: article.id,
            user_account: article.user_account.into_dto(),
            title: article.title,
            content: article.content,
            hashtag: article.hashtag,
            article_comments: self.comments.into_iter().map(|c| c.into_dto()).collect(),
            created_at: article.audit.created_at,
            created_by: article.audit.created_by,
            modified_at: article.audit.modified_at,
            modified_by: article.audit.modified_by,
        }
    }
}

impl Page<Article> {
    /// Converts a page of articles to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedArticlesDto {
        PaginatedArticlesDto {
            articles: self.items.into_iter().map(|a| a.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Field-specific article query.
///
/// Text fields and the author's username and nickname match by substring; the hashtag
/// matches exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleFilter {
    TitleContains(String),
    ContentContains(String),
    UsernameContains(String),
    NicknameContains(String),
    HashtagEquals(String),
}

impl ArticleFilter {
    /// Resolves the search request into a filter.
    ///
    /// Returns `None`, meaning no filter, when either the search type or the keyword is
    /// absent. A present keyword is used as given, including the empty string.
    pub fn from_search(search_type: Option<SearchType>, keyword: Option<String>) -> Option<Self> {
        let (search_type, keyword) = (search_type?, keyword?);

        Some(match search_type {
            SearchType::Title => Self::TitleContains(keyword),
            SearchType::Content => Self::ContentContains(keyword),
            SearchType::Id => Self::UsernameContains(keyword),
            SearchType::Nickname => Self::NicknameContains(keyword),
            SearchType::Hashtag => Self::HashtagEquals(keyword),
        })
    }
}

/// Parameters for creating a new article.
#[derive(Debug, Clone)]
pub struct CreateArticleParam {
    /// Author of the article; the account must exist.
    pub user_account_id: i32,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
}

impl CreateArticleParam {
    pub fn from_dto(user_account_id: i32, dto: CreateArticleDto) -> Self {
        Self {
            user_account_id,
            title: dto.title,
            content: dto.content,
            hashtag: dto.hashtag,
        }
    }
}

/// Parameters for partially updating an article.
///
/// `None` fields are left unchanged on the stored article.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleParam {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub hashtag: Option<String>,
}

impl UpdateArticleParam {
    pub fn from_dto(id: i32, dto: ArticleUpdateDto) -> Self {
        Self {
            id,
            title: dto.title,
            content: dto.content,
            hashtag: dto.hashtag,
        }
    }
}
