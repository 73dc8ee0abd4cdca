//! Navigation view endpoints: selection state, route resolution, overlay,
//! amenities and crowd zones.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use pilgrim_core::models::{CrowdZone, GeoPoint, MarkerKind, ResolvedRoute, RoutePreference};
use pilgrim_core::registry::{self, AMENITIES, MARKERS, USER_KEY};
use pilgrim_core::routing::SelectionError;
use pilgrim_core::{build_overlay, geo, MapOverlay, NavigationSession, TileLayer};

use crate::api::auth;
use crate::state::AppState;

type ApiError = (StatusCode, Json<serde_json::Value>);

// === Request/Response types ===

#[derive(Debug, Serialize)]
pub struct DestinationOption {
    pub key: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AmenityView {
    pub key: &'static str,
    pub marker_key: &'static str,
    pub name: &'static str,
    pub kind: MarkerKind,
    pub color: &'static str,
    pub position: GeoPoint,
    /// Straight-line distance from the user position, in whole meters.
    pub distance_m: i64,
}

/// Current selection plus whatever it resolves to.
#[derive(Debug, Serialize)]
pub struct NavState {
    pub selection: NavigationSession,
    pub ai_routable: bool,
    pub route: Option<ResolvedRoute>,
    /// Blocking user-facing warning, set when the selection is invalid.
    pub notice: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectionUpdate {
    pub start: Option<String>,
    pub end: Option<String>,
    pub preference: Option<RoutePreference>,
}

#[derive(Debug, Deserialize)]
pub struct AmenitySelect {
    pub key: Option<String>,
}

// === Handlers ===

pub async fn list_markers(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<&'static [pilgrim_core::MarkerDef]>, ApiError> {
    auth::authorize(state.as_ref(), &headers)?;
    Ok(Json(MARKERS))
}

pub async fn list_destinations(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<DestinationOption>>, ApiError> {
    auth::authorize(state.as_ref(), &headers)?;
    let options = MARKERS
        .iter()
        .map(|m| DestinationOption {
            key: m.key,
            name: m.name,
        })
        .collect();
    Ok(Json(options))
}

pub async fn list_amenities(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<AmenityView>>, ApiError> {
    auth::authorize(state.as_ref(), &headers)?;
    let user = registry::marker(USER_KEY).ok_or_else(registry_corrupt)?;

    let amenities = AMENITIES
        .iter()
        .filter_map(|a| registry::marker(a.marker_key).map(|m| (a, m)))
        .map(|(a, m)| AmenityView {
            key: a.key,
            marker_key: a.marker_key,
            name: m.name,
            kind: m.kind,
            color: a.color,
            position: m.position,
            distance_m: geo::distance_m(user.position, m.position),
        })
        .collect();
    Ok(Json(amenities))
}

pub async fn get_state(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<NavState>, ApiError> {
    let token = auth::authorize(state.as_ref(), &headers)?;
    let nav = state.nav(&token).ok_or_else(session_gone)?;
    Ok(Json(nav_state(&nav)))
}

pub async fn update_selection(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(update): Json<SelectionUpdate>,
) -> Result<Json<NavState>, ApiError> {
    let token = auth::authorize(state.as_ref(), &headers)?;
    let result = state
        .with_nav(&token, |nav| {
            if let Some(start) = update.start.as_deref() {
                nav.set_start(start)?;
            }
            if let Some(end) = update.end.as_deref() {
                nav.set_end(end)?;
            }
            if let Some(preference) = update.preference {
                nav.set_preference(preference)?;
            }
            Ok::<NavigationSession, SelectionError>(nav.clone())
        })
        .ok_or_else(session_gone)?;

    let nav = result.map_err(selection_error)?;
    Ok(Json(nav_state(&nav)))
}

pub async fn find_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<NavState>, ApiError> {
    let token = auth::authorize(state.as_ref(), &headers)?;
    let result = state
        .with_nav(&token, |nav| {
            nav.find_route()?;
            Ok::<NavigationSession, SelectionError>(nav.clone())
        })
        .ok_or_else(session_gone)?;

    let nav = result.map_err(selection_error)?;
    Ok(Json(nav_state(&nav)))
}

pub async fn select_amenity(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(select): Json<AmenitySelect>,
) -> Result<Json<NavState>, ApiError> {
    let token = auth::authorize(state.as_ref(), &headers)?;
    let result = state
        .with_nav(&token, |nav| {
            nav.select_amenity(select.key.as_deref())?;
            Ok::<NavigationSession, SelectionError>(nav.clone())
        })
        .ok_or_else(session_gone)?;

    let nav = result.map_err(selection_error)?;
    Ok(Json(nav_state(&nav)))
}

pub async fn get_overlay(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<MapOverlay>, ApiError> {
    let token = auth::authorize(state.as_ref(), &headers)?;
    let nav = state.nav(&token).ok_or_else(session_gone)?;
    let config = state.config();
    let tiles = TileLayer {
        url_template: config.tile_url.clone(),
        attribution: config.tile_attribution.clone(),
    };
    let zones = state.crowd_zones();
    Ok(Json(build_overlay(tiles, &zones, &nav)))
}

pub async fn list_zones(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<CrowdZone>>, ApiError> {
    auth::authorize(state.as_ref(), &headers)?;
    Ok(Json(state.crowd_zones()))
}

pub async fn enter_view(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    auth::authorize(state.as_ref(), &headers)?;
    let active = state.enter_view();
    Ok(Json(serde_json::json!({ "active_views": active })))
}

pub async fn exit_view(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    auth::authorize(state.as_ref(), &headers)?;
    let active = state.exit_view();
    Ok(Json(serde_json::json!({ "active_views": active })))
}

// === Helpers ===

fn nav_state(nav: &NavigationSession) -> NavState {
    let (route, notice) = match nav.resolve() {
        Ok(route) => (route, None),
        Err(err) => (None, Some(err.to_string())),
    };
    NavState {
        selection: nav.clone(),
        ai_routable: nav.is_ai_routable(),
        route,
        notice,
    }
}

fn selection_error(err: SelectionError) -> ApiError {
    let status = match err {
        SelectionError::SameStartAndEnd => StatusCode::CONFLICT,
        SelectionError::UnknownMarker { .. } => StatusCode::NOT_FOUND,
        SelectionError::PreferenceUnavailable => StatusCode::CONFLICT,
    };
    (
        status,
        Json(serde_json::json!({ "error": err.to_string() })),
    )
}

fn session_gone() -> ApiError {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({
            "error": "Invalid or expired session",
            "hint": "Log in again via /v1/session/login"
        })),
    )
}

fn registry_corrupt() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Marker registry is incomplete" })),
    )
}
