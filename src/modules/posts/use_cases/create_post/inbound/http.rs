use axum::{
    Json,
    extract::rejection::QueryRejection,
    extract::{Query, State},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::posts::core::post::Post;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreatePostParams {
    pub dog_id: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<CreatePostParams>, QueryRejection>,
) -> Result<Json<Post>, ApiError> {
    let Query(params) = params?;
    let now = Utc::now().timestamp();
    Ok(Json(state.posts.append(params.dog_id, now).await))
}
