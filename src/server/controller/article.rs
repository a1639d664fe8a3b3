use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        article::{
            ArticleCountDto, ArticleDto, ArticleUpdateDto, ArticleWithCommentsDto,
            CreateArticleDto, PaginatedArticlesDto, SearchType,
        },
    },
    server::{
        error::AppError,
        middleware::actor::ActorGuard,
        model::{
            article::{CreateArticleParam, UpdateArticleParam},
            page::PageRequest,
        },
        service::article::ArticleService,
        state::AppState,
    },
};

pub static ARTICLE_TAG: &str = "article";

/// Query parameters for the article listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleSearchParams {
    /// Field the search value is matched against.
    pub search_type: Option<SearchType>,
    /// Value to match; ignored unless `search_type` is also given.
    pub search_value: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(ArticleSearchParams),
    responses(
        (status = 200, description = "Successfully retrieved articles", body = PaginatedArticlesDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_articles(
    State(state): State<AppState>,
    params: Result<Query<ArticleSearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let page = ArticleService::new(&state.db)
        .search_articles(
            params.search_type,
            params.search_value,
            PageRequest::new(params.page, params.entries),
        )
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/articles/count",
    tag = ARTICLE_TAG,
    responses(
        (status = 200, description = "Number of stored articles", body = ArticleCountDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_count(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let count = ArticleService::new(&state.db).get_article_count().await?;

    Ok((StatusCode::OK, Json(ArticleCountDto { count })))
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Article with its comments", body = ArticleWithCommentsDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::new(&state.db)
        .get_article(article_id)
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// POST /api/articles - Create an article authored by the acting user
///
/// The actor header must name an existing user account; that account becomes the
/// article's author.
#[utoipa::path(
    post,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    request_body = CreateArticleDto,
    responses(
        (status = 201, description = "Successfully created article", body = ArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "Actor missing or unknown", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateArticleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let (actor, account) = ActorGuard::new(&state.db, &headers)
        .require_account()
        .await?;

    let article = ArticleService::new(&state.db)
        .save_article(CreateArticleParam::from_dto(account.id, payload), &actor)
        .await?;

    Ok((StatusCode::CREATED, Json(article.into_dto())))
}

/// PUT /api/articles/{article_id} - Partially update an article
///
/// Only fields present in the body are overwritten. Updating an article that does not
/// exist still answers 204.
#[utoipa::path(
    put,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    request_body = ArticleUpdateDto,
    responses(
        (status = 204, description = "Article updated"),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "Actor missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(article_id): Path<i32>,
    payload: Result<Json<ArticleUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let actor = ActorGuard::new(&state.db, &headers).require()?;

    ArticleService::new(&state.db)
        .update_article(UpdateArticleParam::from_dto(article_id, payload), &actor)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 204, description = "Article and its comments deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ArticleService::new(&state.db)
        .delete_article(article_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
