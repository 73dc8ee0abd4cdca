//! REST API routes.

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::api::{assistant, nav, session, ws};
use crate::state::AppState;

/// Create the API router. `/v1/session/login` is the only public route;
/// everything else checks the session token inside its handler.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        // Session lifecycle
        .route("/v1/session/login", post(session::login))
        .route("/v1/session/logout", post(session::logout))
        // Registry lookups
        .route("/v1/nav/markers", get(nav::list_markers))
        .route("/v1/nav/destinations", get(nav::list_destinations))
        .route("/v1/nav/amenities", get(nav::list_amenities))
        // Navigation state
        .route("/v1/nav/state", get(nav::get_state))
        .route("/v1/nav/selection", put(nav::update_selection))
        .route("/v1/nav/find-route", post(nav::find_route))
        .route("/v1/nav/amenity", post(nav::select_amenity))
        .route("/v1/nav/overlay", get(nav::get_overlay))
        .route("/v1/nav/zones", get(nav::list_zones))
        // View lifecycle drives the crowd simulation
        .route("/v1/nav/view/enter", post(nav::enter_view))
        .route("/v1/nav/view/exit", post(nav::exit_view))
        // Assistant
        .route("/v1/assistant", post(assistant::ask))
        // WebSocket streaming
        .route("/v1/ws", get(ws::ws_handler))
}
