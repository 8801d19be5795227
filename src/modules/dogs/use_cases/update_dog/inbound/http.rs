use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
};

use crate::modules::dogs::core::dog::{Dog, DogDraft, DogPatch, DogUpdate};
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

/// `PATCH /dog/{pk}`: fields left out of the body keep their stored values.
pub async fn handle_merge(
    State(state): State<AppState>,
    key: Result<Path<i64>, PathRejection>,
    body: Result<Json<DogPatch>, JsonRejection>,
) -> Result<Json<Dog>, ApiError> {
    let Path(key) = key?;
    let Json(patch) = body?;
    apply(&state, key, DogUpdate::Merge(patch)).await
}

/// `PUT /dogs/{dog_id}`: the body replaces the stored dog.
pub async fn handle_replace(
    State(state): State<AppState>,
    key: Result<Path<i64>, PathRejection>,
    body: Result<Json<DogDraft>, JsonRejection>,
) -> Result<Json<Dog>, ApiError> {
    let Path(key) = key?;
    let Json(draft) = body?;
    apply(&state, key, DogUpdate::Replace(draft)).await
}

async fn apply(state: &AppState, key: i64, update: DogUpdate) -> Result<Json<Dog>, ApiError> {
    state
        .dogs
        .update(key, update)
        .await
        .map(Json)
        .map_err(|e| state.registry_error(e))
}
