//! Login and logout.
//!
//! The "authenticated" flag plus role live only in process memory for the
//! lifetime of the session token; nothing is persisted across restarts.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::api::auth;
use crate::state::{AppState, Role};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "Please enter email and password."
            })),
        );
    }

    let role = req.role.unwrap_or_default();
    let session = state.login(req.email.trim(), role);
    tracing::info!(
        "Session opened for {} ({:?}); {} active",
        session.email,
        session.role,
        state.session_count()
    );

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "token": session.token,
            "role": session.role,
        })),
    )
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let token = auth::authorize(state.as_ref(), &headers)?;
    state.logout(&token);
    tracing::info!("Session closed");
    Ok(Json(serde_json::json!({ "cleared": true })))
}
