use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::memories::use_cases::list_memories::query::ListMemories;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListMemoriesParams {
    pub search: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListMemoriesParams>,
) -> impl IntoResponse {
    let query = ListMemories {
        search: params.search,
    };
    match state.list_handler.handle(query).await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to list memories");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal error" })),
            )
                .into_response()
        }
    }
}
