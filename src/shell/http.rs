use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::modules::dogs::use_cases::create_dog::inbound::http as create_dog_http;
use crate::modules::dogs::use_cases::get_dog::inbound::http as get_dog_http;
use crate::modules::dogs::use_cases::list_dogs::inbound::http as list_dogs_http;
use crate::modules::dogs::use_cases::update_dog::inbound::http as update_dog_http;
use crate::modules::posts::use_cases::create_post::inbound::http as create_post_http;
use crate::shell::state::AppState;

// `/dog...` routes merge on PATCH; `/dogs...` routes replace on PUT.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/post", post(create_post_http::handle))
        .route(
            "/dog",
            post(create_dog_http::handle).get(list_dogs_http::handle_query),
        )
        .route(
            "/dog/{pk}",
            get(get_dog_http::handle).patch(update_dog_http::handle_merge),
        )
        .route(
            "/dogs",
            post(create_dog_http::handle).get(list_dogs_http::handle_all),
        )
        .route("/dogs/type/{kind}", get(list_dogs_http::handle_by_kind))
        .route(
            "/dogs/{dog_id}",
            get(get_dog_http::handle).put(update_dog_http::handle_replace),
        )
        .with_state(state)
}

async fn welcome() -> Json<Value> {
    Json(json!({"message": "Welcome to the Dog Information Service"}))
}
