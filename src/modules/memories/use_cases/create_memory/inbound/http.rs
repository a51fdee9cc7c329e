use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::modules::memories::core::entry::Entry;
use crate::modules::memories::use_cases::create_memory::command::CreateMemory;
use crate::modules::memories::use_cases::create_memory::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateMemoryBody {
    pub content: Option<String>,
}

#[derive(Serialize)]
pub struct CreateMemoryResponse {
    pub success: bool,
    pub entry: Entry,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateMemoryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateMemory {
        content: body.content,
        created_at: Utc::now(),
    };

    match state.create_handler.handle(command).await {
        Ok(entry) => Json(CreateMemoryResponse {
            success: true,
            entry,
        })
        .into_response(),
        Err(ApplicationError::Domain(reason)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": reason.to_string() })),
        )
            .into_response(),
        Err(ApplicationError::Repository(e)) => {
            tracing::error!(error = %e, "failed to save memory");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal error" })),
            )
                .into_response()
        }
    }
}
