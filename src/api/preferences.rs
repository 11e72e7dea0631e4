//! Preference endpoints: theme, read and favorite flags

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::preferences::{PreferencesResponse, SetTheme, Theme, ToggleResponse},
    AppState,
};

/// Get current preferences
#[utoipa::path(
    get,
    path = "/preferences",
    tag = "preferences",
    responses(
        (status = 200, description = "Current preferences", body = PreferencesResponse)
    )
)]
pub async fn get_preferences(State(state): State<AppState>) -> Json<PreferencesResponse> {
    Json(state.services.preferences.snapshot().into())
}

/// Set the theme
#[utoipa::path(
    put,
    path = "/preferences/theme",
    tag = "preferences",
    request_body = SetTheme,
    responses(
        (status = 200, description = "Theme updated", body = Theme),
        (status = 400, description = "Unknown theme", body = crate::error::ErrorResponse)
    )
)]
pub async fn set_theme(
    State(state): State<AppState>,
    payload: Result<Json<SetTheme>, JsonRejection>,
) -> AppResult<Json<Theme>> {
    let Json(request) = payload?;
    state.services.preferences.set_theme(request.theme);
    Ok(Json(request.theme))
}

/// Switch between light and dark
#[utoipa::path(
    post,
    path = "/preferences/theme/toggle",
    tag = "preferences",
    responses(
        (status = 200, description = "New theme", body = Theme)
    )
)]
pub async fn toggle_theme(State(state): State<AppState>) -> Json<Theme> {
    Json(state.services.preferences.toggle_theme())
}

/// Toggle the read flag of a book
#[utoipa::path(
    post,
    path = "/books/{id}/read",
    tag = "preferences",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Read flag after the toggle", body = ToggleResponse)
    )
)]
pub async fn toggle_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ToggleResponse>> {
    let active = state.services.preferences.toggle_read(&id);
    state.services.refresh_after_toggle().await;
    Ok(Json(ToggleResponse { book_id: id, active }))
}

/// Toggle the favorite flag of a book
#[utoipa::path(
    post,
    path = "/books/{id}/favorite",
    tag = "preferences",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Favorite flag after the toggle", body = ToggleResponse)
    )
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ToggleResponse>> {
    let active = state.services.preferences.toggle_favorite(&id);
    state.services.refresh_after_toggle().await;
    Ok(Json(ToggleResponse { book_id: id, active }))
}
