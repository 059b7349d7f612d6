use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::core::responses::ErrorMessage;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    if state.events.remove(&id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorMessage::new("Event not found")),
        )
            .into_response()
    }
}
