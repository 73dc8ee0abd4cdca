//! API routes for the PilgrimPath server.

pub mod assistant;
pub mod auth;
pub mod nav;
mod routes;
pub mod session;
pub mod ws;

use axum::Router;

pub fn routes() -> Router<std::sync::Arc<crate::state::AppState>> {
    routes::create_router()
}
