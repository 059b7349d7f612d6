use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Map, Value};

use crate::modules::events::core::record::{EventRecord, new_event_id};
use crate::shared::core::responses::ErrorMessage;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match body {
        Ok(b) => b,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorMessage::new("Malformed JSON body")),
            )
                .into_response();
        }
    };

    let record = EventRecord::new(new_event_id(), payload);
    state.events.append(record.clone()).await;

    (StatusCode::CREATED, Json(record)).into_response()
}
