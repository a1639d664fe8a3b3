use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user_account::{CreateUserAccountDto, UserAccountDto},
    },
    server::{
        error::AppError,
        middleware::actor::ActorGuard,
        model::user_account::CreateUserAccountParam,
        service::user_account::UserAccountService,
        state::AppState,
    },
};

pub static USER_ACCOUNT_TAG: &str = "user_account";

/// POST /api/users - Register a user account
///
/// The actor header is recorded as the creator; for self sign-up it carries the new
/// username.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_ACCOUNT_TAG,
    request_body = CreateUserAccountDto,
    responses(
        (status = 201, description = "Successfully created user account", body = UserAccountDto),
        (status = 400, description = "Invalid user account data", body = ErrorDto),
        (status = 401, description = "Actor missing", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateUserAccountDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let actor = ActorGuard::new(&state.db, &headers).require()?;

    let account = UserAccountService::new(&state.db)
        .save_user_account(CreateUserAccountParam::from_dto(payload), &actor)
        .await?;

    Ok((StatusCode::CREATED, Json(account.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users/{username}",
    tag = USER_ACCOUNT_TAG,
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "User account", body = UserAccountDto),
        (status = 404, description = "User account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_account(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let account = UserAccountService::new(&state.db)
        .get_user_account(&username)
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}
