//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{error::AppResult, AppState};

/// Delete a user through the remote API
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse),
        (status = 502, description = "Remote API unreachable", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.users.delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
