use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        article::{self, ARTICLE_TAG},
        article_comment::{self, ARTICLE_COMMENT_TAG},
        user_account::{self, USER_ACCOUNT_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Project Board API", description = "Articles, comments and user accounts"),
    tags(
        (name = ARTICLE_TAG, description = "Article search, reading and editing"),
        (name = ARTICLE_COMMENT_TAG, description = "Comments attached to articles"),
        (name = USER_ACCOUNT_TAG, description = "User account registration and lookup")
    )
)]
struct ApiDoc;

/// Builds the API router with its OpenAPI document served under `/api/docs`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(article::search_articles, article::create_article))
        .routes(routes!(article::get_article_count))
        .routes(routes!(
            article::get_article,
            article::update_article,
            article::delete_article
        ))
        .routes(routes!(
            article_comment::get_article_comments,
            article_comment::create_article_comment
        ))
        .routes(routes!(article_comment::delete_article_comment))
        .routes(routes!(user_account::create_user_account))
        .routes(routes!(user_account::get_user_account))
        .with_state(state)
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
