//! Article comment domain models and parameters.

use crate::{
    model::article_comment::{ArticleCommentDto, CreateArticleCommentDto},
    server::model::audit::AuditMetadata,
};

/// Comment attached to exactly one article.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleComment {
    pub id: i32,
    pub article_id: i32,
    pub content: String,
    pub audit: AuditMetadata,
}

impl ArticleComment {
    /// Converts an entity model to a comment domain model at the repository boundary.
    pub fn from_entity(entity: entity::article_comment::Model) -> Self {
        Self {
            id: entity.id,
            article_id: entity.article_id,
            content: entity.content,
            audit: AuditMetadata {
                created_at: entity.created_at,
                created_by: entity.created_by,
                modified_at: entity.modified_at,
                modified_by: entity.modified_by,
            },
        }
    }

    /// Converts the comment domain model to a DTO for API responses.
    pub fn into_dto(self) -> ArticleCommentDto {
        ArticleCommentDto {
            id: self.id,
            article_id: self.article_id,
            content: self.content,
            created_at: self.audit.created_at,
            created_by: self.audit.created_by,
            modified_at: self.audit.modified_at,
            modified_by: self.audit.modified_by,
        }
    }
}

/// Parameters for attaching a new comment to an article.
#[derive(Debug, Clone)]
pub struct CreateArticleCommentParam {
    /// Parent article; must exist for the comment to be saved.
    pub article_id: i32,
    pub content: String,
}

impl CreateArticleCommentParam {
    pub fn from_dto(article_id: i32, dto: CreateArticleCommentDto) -> Self {
        Self {
            article_id,
            content: dto.content,
        }
    }
}
