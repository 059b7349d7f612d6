use axum::{Json, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthCheckResponse {
    pub message: &'static str,
}

pub async fn handle() -> impl IntoResponse {
    Json(HealthCheckResponse {
        message: "Hello World",
    })
}
