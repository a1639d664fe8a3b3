use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ActorError {
    /// The actor header was absent or blank on a write request.
    ///
    /// Audit columns cannot be stamped without an actor, so the request is
    /// rejected with 401 Unauthorized.
    #[error("Write request is missing the actor header")]
    MissingActor,

    /// The actor header named a username with no matching account.
    ///
    /// Results in 401 Unauthorized when the operation needs the actor's account,
    /// such as authoring an article.
    #[error("No user account exists for actor '{0}'")]
    UnknownAccount(String),
}

/// Converts actor errors into HTTP responses.
///
/// Both variants map to 401 Unauthorized. The details are logged at debug level while
/// the client-facing message stays generic.
impl IntoResponse for ActorError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "A known actor is required for this request".to_string(),
            }),
        )
            .into_response()
    }
}
