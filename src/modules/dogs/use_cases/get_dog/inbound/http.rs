use axum::{
    Json,
    extract::rejection::PathRejection,
    extract::{Path, State},
};

use crate::modules::dogs::core::dog::Dog;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    key: Result<Path<i64>, PathRejection>,
) -> Result<Json<Dog>, ApiError> {
    let Path(key) = key?;
    let dog = state
        .dogs
        .get(key)
        .await
        .map_err(|e| state.registry_error(e))?;
    Ok(Json(dog))
}
