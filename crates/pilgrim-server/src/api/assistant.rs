//! AI assistant proxy.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::api::auth;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub prompt: String,
}

/// One request/response round trip. The client substitutes fixed fallback
/// strings on any failure, so this endpoint always answers 200 once
/// authorized.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<AssistantRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    auth::authorize(state.as_ref(), &headers)?;

    let prompt = req.prompt.trim();
    if prompt.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Prompt must not be empty" })),
        ));
    }

    let reply = state.assist().generate(prompt).await;
    Ok(Json(serde_json::json!({ "reply": reply })))
}
