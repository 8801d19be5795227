use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::modules::dogs::core::dog::{Dog, DogKind};
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListDogsParams {
    pub kind: Option<DogKind>,
}

/// `GET /dog?kind=...`, the filter is optional.
pub async fn handle_query(
    State(state): State<AppState>,
    params: Result<Query<ListDogsParams>, QueryRejection>,
) -> Result<Json<Vec<Dog>>, ApiError> {
    let Query(params) = params?;
    Ok(Json(state.dogs.list(params.kind).await))
}

/// `GET /dogs`
pub async fn handle_all(State(state): State<AppState>) -> Json<Vec<Dog>> {
    Json(state.dogs.list(None).await)
}

/// `GET /dogs/type/{kind}`
pub async fn handle_by_kind(
    State(state): State<AppState>,
    kind: Result<Path<DogKind>, PathRejection>,
) -> Result<Json<Vec<Dog>>, ApiError> {
    let Path(kind) = kind?;
    Ok(Json(state.dogs.list(Some(kind)).await))
}
