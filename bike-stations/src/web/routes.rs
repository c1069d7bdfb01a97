//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::pipeline::{Command, Reply};

use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/resolve", get(resolve_query).post(resolve_json))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// `GET /resolve?mode=address_query&dictation=...`
///
/// Failures are part of the reply body, so this always answers 200.
async fn resolve_query(
    State(state): State<AppState>,
    Query(command): Query<Command>,
) -> Json<Reply> {
    Json(state.resolver.resolve(&command, &state.config).await)
}

/// `POST /resolve` with a JSON command body.
async fn resolve_json(State(state): State<AppState>, Json(command): Json<Command>) -> Json<Reply> {
    Json(state.resolver.resolve(&command, &state.config).await)
}
