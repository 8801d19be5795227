use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::modules::dogs::core::dog::{Dog, DogDraft};
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DogDraft>, JsonRejection>,
) -> Result<Json<Dog>, ApiError> {
    let Json(draft) = body?;
    let dog = state
        .dogs
        .create(draft)
        .await
        .map_err(|e| state.registry_error(e))?;
    Ok(Json(dog))
}
