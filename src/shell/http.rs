use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};

use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::events::use_cases::health_check::inbound::http as health_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::shared::core::responses::ErrorMessage;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    // Method fallbacks replace axum's default 405 so that every undefined
    // method/path pair answers the same JSON 404.
    Router::new()
        .route("/", get(health_http::handle).fallback(not_found))
        .route(
            "/events",
            get(list_http::handle)
                .post(create_http::handle)
                .fallback(not_found),
        )
        .route(
            "/events/{id}",
            delete(delete_http::handle).fallback(not_found),
        )
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorMessage::new("Not Found")))
}
