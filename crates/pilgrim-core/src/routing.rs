//! Route selection for the navigation view.
//!
//! Resolves the current selection to either a predefined route, a schematic
//! fallback path, or no route. Resolution is pure; it is recomputed on every
//! state change and never cached.

use serde::Serialize;
use thiserror::Error;

use crate::geo;
use crate::models::{GeoPoint, ResolvedRoute, RoutePreference};
use crate::registry::{self, USER_KEY};

/// Fallback colors for synthesized paths.
pub const FALLBACK_AI_COLOR: &str = "#3b82f6";
pub const FALLBACK_SHORTEST_COLOR: &str = "#8b5cf6";
pub const FALLBACK_CUSTOM_COLOR: &str = "#10b981";

/// User-facing notice shown when a selection cannot produce a route.
pub const SAME_POINT_NOTICE: &str = "Start and end points cannot be the same.";

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionError {
    /// Invalid selection; the caller must surface a blocking notice.
    #[error("{}", SAME_POINT_NOTICE)]
    SameStartAndEnd,
    /// A key arrived over the wire that is not in the registry.
    #[error("unknown marker key: {key}")]
    UnknownMarker { key: String },
    /// Route preference is only selectable when starting from the user
    /// position.
    #[error("route preference requires starting from your current location")]
    PreferenceUnavailable,
}

/// Whether the predefined route tables apply to this start point.
pub fn is_ai_routable(start_key: &str) -> bool {
    start_key == USER_KEY
}

/// Resolve the current selection into a route, if any.
///
/// Decision policy, in priority order:
/// 1. start == end is an invalid selection and produces no route;
/// 2. an AI-routable start selects the predefined branch for the
///    destination, falling back to a schematic path when none exists;
/// 3. any other start shows nothing until the user explicitly triggers
///    "find route", then a schematic path.
pub fn resolve_route(
    start_key: &str,
    end_key: &str,
    preference: RoutePreference,
    custom_route_active: bool,
) -> Result<Option<ResolvedRoute>, SelectionError> {
    if start_key == end_key {
        return Err(SelectionError::SameStartAndEnd);
    }

    let start = registry::marker(start_key).ok_or_else(|| SelectionError::UnknownMarker {
        key: start_key.to_string(),
    })?;
    let end = registry::marker(end_key).ok_or_else(|| SelectionError::UnknownMarker {
        key: end_key.to_string(),
    })?;

    if is_ai_routable(start_key) {
        if let Some(route) = registry::predefined_route(end_key, preference) {
            let path: Vec<GeoPoint> = route.path.to_vec();
            return Ok(Some(ResolvedRoute {
                name: route.name.to_string(),
                description: render_template(route.description, start.name, end.name),
                color: route.color.to_string(),
                distance_m: geo::path_length_m(&path),
                path,
            }));
        }

        let color = match preference {
            RoutePreference::Ai => FALLBACK_AI_COLOR,
            RoutePreference::Shortest => FALLBACK_SHORTEST_COLOR,
        };
        let name = match preference {
            RoutePreference::Ai => "AI Recommended Route",
            RoutePreference::Shortest => "Shortest Path",
        };
        return Ok(Some(schematic_route(
            start.position,
            end.position,
            name,
            color,
            start.name,
            end.name,
        )));
    }

    if custom_route_active {
        return Ok(Some(schematic_route(
            start.position,
            end.position,
            "Direct Path",
            FALLBACK_CUSTOM_COLOR,
            start.name,
            end.name,
        )));
    }

    Ok(None)
}

/// Axis-aligned two-segment placeholder path. This is a schematic
/// visualization, not a routing algorithm: no obstacle avoidance, no graph
/// search.
pub fn schematic_path(start: GeoPoint, end: GeoPoint) -> Vec<GeoPoint> {
    vec![start, GeoPoint::new(start.lat, end.lon), end]
}

fn schematic_route(
    start: GeoPoint,
    end: GeoPoint,
    name: &str,
    color: &str,
    start_name: &str,
    end_name: &str,
) -> ResolvedRoute {
    let path = schematic_path(start, end);
    ResolvedRoute {
        name: name.to_string(),
        description: render_template("A direct path between {start} and {end}.", start_name, end_name),
        color: color.to_string(),
        distance_m: geo::path_length_m(&path),
        path,
    }
}

fn render_template(template: &str, start_name: &str, end_name: &str) -> String {
    template
        .replace("{start}", start_name)
        .replace("{end}", end_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{marker, predefined_route};

    #[test]
    fn same_start_and_end_is_invalid() {
        let err = resolve_route("user", "user", RoutePreference::Ai, false).unwrap_err();
        assert_eq!(err, SelectionError::SameStartAndEnd);
        // Regardless of the custom-route flag.
        let err = resolve_route("ramGhat", "ramGhat", RoutePreference::Ai, true).unwrap_err();
        assert_eq!(err, SelectionError::SameStartAndEnd);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = resolve_route("user", "nowhere", RoutePreference::Ai, false).unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnknownMarker {
                key: "nowhere".to_string()
            }
        );
    }

    #[test]
    fn user_start_selects_predefined_branch() {
        let stored = predefined_route("mahakaleshwar", RoutePreference::Ai).unwrap();
        let route = resolve_route("user", "mahakaleshwar", RoutePreference::Ai, false)
            .unwrap()
            .unwrap();
        assert_eq!(route.path, stored.path.to_vec());
        assert_eq!(route.color, stored.color);
        // Templates are rendered with the marker names.
        assert!(route.description.contains("Your Location"));
        assert!(route.description.contains("Mahakaleshwar Temple"));
    }

    #[test]
    fn preference_branches_differ() {
        let ai = resolve_route("user", "ramGhat", RoutePreference::Ai, false)
            .unwrap()
            .unwrap();
        let shortest = resolve_route("user", "ramGhat", RoutePreference::Shortest, false)
            .unwrap()
            .unwrap();
        assert_ne!(ai.path, shortest.path);
        assert!(ai.path.len() >= 2);
        assert!(shortest.path.len() >= 2);
    }

    #[test]
    fn missing_destination_synthesizes_right_angle() {
        let route = resolve_route("user", "kalBhairav", RoutePreference::Ai, false)
            .unwrap()
            .unwrap();
        let start = marker("user").unwrap().position;
        let end = marker("kalBhairav").unwrap().position;
        assert_eq!(route.path.len(), 3);
        assert_eq!(route.path[0], start);
        // Corner shares latitude with start and longitude with end.
        assert_eq!(route.path[1].lat, start.lat);
        assert_eq!(route.path[1].lon, end.lon);
        assert_eq!(route.path[2], end);
        assert_eq!(route.color, FALLBACK_AI_COLOR);

        let violet = resolve_route("user", "kalBhairav", RoutePreference::Shortest, false)
            .unwrap()
            .unwrap();
        assert_eq!(violet.color, FALLBACK_SHORTEST_COLOR);
    }

    #[test]
    fn non_user_start_requires_explicit_trigger() {
        let before = resolve_route("policeStation1", "mahakaleshwar", RoutePreference::Ai, false)
            .unwrap();
        assert!(before.is_none());

        let after = resolve_route("policeStation1", "mahakaleshwar", RoutePreference::Ai, true)
            .unwrap()
            .unwrap();
        assert_eq!(after.path.len(), 3);
        assert_eq!(after.color, FALLBACK_CUSTOM_COLOR);
        assert_eq!(after.name, "Direct Path");
    }

    #[test]
    fn resolution_is_idempotent() {
        let a = resolve_route("user", "harsiddhi", RoutePreference::Shortest, false).unwrap();
        let b = resolve_route("user", "harsiddhi", RoutePreference::Shortest, false).unwrap();
        assert_eq!(a, b);
    }
}
