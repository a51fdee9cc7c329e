use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::memories::use_cases::create_memory::inbound::http as create_http;
use crate::modules::memories::use_cases::delete_memory::inbound::http as delete_http;
use crate::modules::memories::use_cases::list_memories::inbound::http as list_http;
use crate::modules::memories::use_cases::wake_up::inbound::http as wake_up_http;
use crate::shell::state::AppState;

pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/wake-up", get(wake_up_http::handle))
        .route(
            "/memories",
            get(list_http::handle).post(create_http::handle),
        )
        .route("/memories/{id}", delete(delete_http::handle))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
