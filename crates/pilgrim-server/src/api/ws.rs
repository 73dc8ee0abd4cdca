//! WebSocket streaming of crowd zone snapshots.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::auth;
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct WsQuery {
    token: Option<String>,
}

/// Handler for WebSocket connections. The session token may arrive as a
/// query parameter (browser WebSocket clients cannot set headers) or as a
/// bearer header.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<WsQuery>,
) -> axum::response::Response {
    let provided = params
        .token
        .clone()
        .or_else(|| auth::extract_session_token(&headers));

    let valid = provided
        .as_deref()
        .map(|token| state.session_role(token).is_some())
        .unwrap_or(false);
    if !valid {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    ws.on_upgrade(move |socket| handle_socket(socket, state))
        .into_response()
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    let mut rx = state.tx.subscribe();

    loop {
        tokio::select! {
            incoming = socket.recv() => {
                match incoming {
                    Some(Ok(Message::Ping(payload))) => {
                        if socket.send(Message::Pong(payload)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) => break,
                    Some(Ok(_)) => {}
                    Some(Err(_)) | None => break,
                }
            }
            event = rx.recv() => {
                match event {
                    Ok(payload) => {
                        if socket.send(Message::Text(payload.as_ref().to_owned())).await.is_err() {
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => {
                        // Drop missed snapshots; a newer one will arrive soon.
                        continue;
                    }
                    Err(_) => break,
                }
            }
        }
    }
}
