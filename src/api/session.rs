//! Session identity endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::session::{PendingEmail, SessionContext, SessionUser, SignIn},
    AppState,
};

use super::Session;

/// Get the current session identity
#[utoipa::path(
    get,
    path = "/session",
    tag = "session",
    responses(
        (status = 200, description = "Current identity", body = SessionContext)
    )
)]
pub async fn get_session(Session(session): Session) -> Json<SessionContext> {
    Json(session)
}

/// Record a signed-in user
#[utoipa::path(
    post,
    path = "/session",
    tag = "session",
    request_body = SignIn,
    responses(
        (status = 200, description = "Identity after sign-in", body = SessionContext),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignIn>, JsonRejection>,
) -> AppResult<Json<SessionContext>> {
    let Json(request) = payload?;
    request.validate()?;

    let user = SessionUser {
        role: request.role,
        email: request.email,
    };
    Ok(Json(state.services.session.sign_in(&user)?))
}

/// Forget the signed-in user
#[utoipa::path(
    delete,
    path = "/session",
    tag = "session",
    responses(
        (status = 204, description = "Signed out")
    )
)]
pub async fn sign_out(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.services.session.sign_out()?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remember the email a registration waits to verify
#[utoipa::path(
    put,
    path = "/session/pending-email",
    tag = "session",
    request_body = PendingEmail,
    responses(
        (status = 204, description = "Email stored"),
        (status = 400, description = "Invalid email", body = crate::error::ErrorResponse)
    )
)]
pub async fn set_pending_email(
    State(state): State<AppState>,
    payload: Result<Json<PendingEmail>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(request) = payload?;
    request.validate()?;
    state.services.session.set_pending_email(&request.email)?;
    Ok(StatusCode::NO_CONTENT)
}
