//! Catalog endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Book, CatalogStatus, Facets, RefreshOutcome},
    AppState,
};

/// Filtered catalog response
#[derive(Serialize, ToSchema)]
pub struct CatalogResponse {
    pub status: CatalogStatus,
    /// Books matching the current criteria, in catalog order
    pub books: Vec<Book>,
}

/// Result of a refresh request
#[derive(Serialize, ToSchema)]
pub struct RefreshResponse {
    /// False when a newer refresh replaced this one
    pub applied: bool,
    pub status: CatalogStatus,
}

/// List books matching the current criteria
#[utoipa::path(
    get,
    path = "/catalog",
    tag = "catalog",
    responses(
        (status = 200, description = "Filtered catalog", body = CatalogResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<CatalogResponse> {
    let criteria = state.services.criteria.current();
    Json(CatalogResponse {
        status: state.services.catalog.status(),
        books: state.services.catalog.filtered(&criteria),
    })
}

/// Fetch the catalog again from the remote API
#[utoipa::path(
    post,
    path = "/catalog/refresh",
    tag = "catalog",
    responses(
        (status = 200, description = "Catalog refreshed", body = RefreshResponse),
        (status = 502, description = "Remote API unreachable, previous catalog kept", body = crate::error::ErrorResponse)
    )
)]
pub async fn refresh(State(state): State<AppState>) -> AppResult<Json<RefreshResponse>> {
    let outcome = state.services.catalog.refresh().await?;
    Ok(Json(RefreshResponse {
        applied: matches!(outcome, RefreshOutcome::Applied { .. }),
        status: state.services.catalog.status(),
    }))
}

/// Sidebar facets over the full catalog
#[utoipa::path(
    get,
    path = "/catalog/facets",
    tag = "catalog",
    responses(
        (status = 200, description = "Categories, genres, years and flag counts", body = Facets)
    )
)]
pub async fn get_facets(State(state): State<AppState>) -> Json<Facets> {
    Json(state.services.catalog.facets())
}
