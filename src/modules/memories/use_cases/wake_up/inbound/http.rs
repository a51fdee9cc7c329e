use axum::{Json, response::IntoResponse};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WakeUpResponse {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn handle() -> impl IntoResponse {
    tracing::info!("server woken up by client");
    Json(WakeUpResponse {
        status: "awake",
        message: "I am ready.",
    })
}
