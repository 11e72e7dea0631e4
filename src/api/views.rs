//! Composed page endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::SessionContext,
    views::{compose, Page, Route, ViewContext},
    AppState,
};

use super::Session;

/// Render the book list (path `/`)
#[utoipa::path(
    get,
    path = "/views",
    tag = "views",
    responses(
        (status = 200, description = "Composed page for the book list", body = Page)
    )
)]
pub async fn render_root(
    State(state): State<AppState>,
    Session(session): Session,
) -> AppResult<Json<Page>> {
    Ok(Json(render(&state, &session, "/")?))
}

/// Render the page for any UI path
#[utoipa::path(
    get,
    path = "/views/{path}",
    tag = "views",
    params(
        ("path" = String, Path, description = "UI path, e.g. book/42 or users/details/7")
    ),
    responses(
        (status = 200, description = "Composed page", body = Page),
        (status = 404, description = "No screen for this path", body = crate::error::ErrorResponse)
    )
)]
pub async fn render_path(
    State(state): State<AppState>,
    Session(session): Session,
    Path(path): Path<String>,
) -> AppResult<Json<Page>> {
    Ok(Json(render(&state, &session, &path)?))
}

fn render(state: &AppState, session: &SessionContext, path: &str) -> AppResult<Page> {
    let route = Route::parse(path)?;
    let catalog = state.services.catalog.books();
    let criteria = state.services.criteria.current();

    let ctx = ViewContext {
        session,
        theme: state.services.preferences.theme(),
        criteria: &criteria,
        catalog: &catalog,
    };
    Ok(compose(&route, &ctx))
}
