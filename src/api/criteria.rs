//! Filter criteria endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{
    error::AppResult,
    models::criteria::{CriteriaUpdate, FilterCriteria},
    AppState,
};

/// Get the criteria applied to the book list
#[utoipa::path(
    get,
    path = "/criteria",
    tag = "criteria",
    responses(
        (status = 200, description = "Current criteria", body = FilterCriteria)
    )
)]
pub async fn get_criteria(State(state): State<AppState>) -> Json<FilterCriteria> {
    Json(state.services.criteria.current())
}

/// Update some of the criteria
#[utoipa::path(
    put,
    path = "/criteria",
    tag = "criteria",
    request_body = CriteriaUpdate,
    responses(
        (status = 200, description = "Criteria after the update", body = FilterCriteria),
        (status = 400, description = "Invalid criteria", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_criteria(
    State(state): State<AppState>,
    payload: Result<Json<CriteriaUpdate>, JsonRejection>,
) -> AppResult<Json<FilterCriteria>> {
    let Json(update) = payload?;
    Ok(Json(state.services.criteria.update(update)?))
}

/// Clear all criteria
#[utoipa::path(
    delete,
    path = "/criteria",
    tag = "criteria",
    responses(
        (status = 200, description = "Default criteria", body = FilterCriteria)
    )
)]
pub async fn reset_criteria(State(state): State<AppState>) -> Json<FilterCriteria> {
    Json(state.services.criteria.reset())
}
