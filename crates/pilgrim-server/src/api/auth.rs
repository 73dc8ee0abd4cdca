//! Session authorization for protected endpoints.

use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;

use crate::state::AppState;

/// Extract the session token from headers.
/// Accepts `Authorization: Bearer <token>` or `X-Session-Token: <token>`.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(header::AUTHORIZATION) {
        if let Ok(text) = value.to_str() {
            if let Some(token) = text.strip_prefix("Bearer ") {
                let token = token.trim();
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }

    if let Some(value) = headers.get("X-Session-Token") {
        if let Ok(token) = value.to_str() {
            let token = token.trim();
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }

    None
}

/// Require a logged-in session and return its token.
pub fn authorize(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<String, (StatusCode, Json<serde_json::Value>)> {
    let token = extract_session_token(headers).ok_or((
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({
            "error": "Authorization required",
            "hint": "Add header: Authorization: Bearer <session_token>"
        })),
    ))?;

    if state.session_role(&token).is_none() {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": "Invalid or expired session",
                "hint": "Log in again via /v1/session/login"
            })),
        ));
    }

    Ok(token)
}
