use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        article_comment::{ArticleCommentDto, CreateArticleCommentDto},
    },
    server::{
        error::AppError,
        middleware::actor::ActorGuard,
        model::article_comment::CreateArticleCommentParam,
        service::article_comment::ArticleCommentService,
        state::AppState,
    },
};

pub static ARTICLE_COMMENT_TAG: &str = "article_comment";

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    tag = ARTICLE_COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Comments of the article, empty if it does not exist", body = Vec<ArticleCommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_comments(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = ArticleCommentService::new(&state.db)
        .search_article_comment(article_id)
        .await?;

    let comments_dto: Vec<_> = comments.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(comments_dto)))
}

/// POST /api/articles/{article_id}/comments - Add a comment to an article
///
/// A comment on a missing article is dropped and the request still answers 204.
#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    tag = ARTICLE_COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    request_body = CreateArticleCommentDto,
    responses(
        (status = 204, description = "Comment saved"),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 401, description = "Actor missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(article_id): Path<i32>,
    payload: Result<Json<CreateArticleCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let actor = ActorGuard::new(&state.db, &headers).require()?;

    ArticleCommentService::new(&state.db)
        .save_article_comment(
            CreateArticleCommentParam::from_dto(article_id, payload),
            &actor,
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = ARTICLE_COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ArticleCommentService::new(&state.db)
        .delete_article_comment(comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
