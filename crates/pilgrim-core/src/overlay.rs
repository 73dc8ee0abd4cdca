//! Map overlay construction.
//!
//! Turns the registry, the live crowd zones, and the current navigation
//! session into a declarative description of what the map front-end should
//! draw. Pure: a function of its inputs, mutating none of them.

use serde::{Deserialize, Serialize};

use crate::models::{CrowdLevel, CrowdZone, GeoPoint, MarkerKind, ResolvedRoute};
use crate::registry::{self, AMENITIES, MAP_CENTER_KEY, MARKERS};
use crate::session::NavigationSession;

/// Default map zoom level.
pub const DEFAULT_ZOOM: u8 = 16;

/// Zoom used when the camera flies to a selected amenity.
pub const FLY_TO_ZOOM: u8 = 17;

/// Upper bound on the fly-to animation, in seconds.
pub const FLY_TO_DURATION_S: f64 = 1.0;

const AMENITY_ICON_PX: u32 = 16;
const AMENITY_ICON_SELECTED_PX: u32 = 24;
const SELECTED_BORDER_COLOR: &str = "#f97316";
const SELECTED_Z_OFFSET: i32 = 1000;

/// Base tile layer, treated as an opaque rendering collaborator. The server
/// fills this from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

/// A plain registry marker with its popup text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerGraphic {
    pub key: String,
    pub name: String,
    pub kind: MarkerKind,
    pub position: GeoPoint,
    pub popup: String,
}

/// An amenity icon. The selected amenity renders larger, with an accent
/// border, above everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmenityGraphic {
    pub key: String,
    pub marker_key: String,
    pub name: String,
    pub position: GeoPoint,
    pub color: String,
    pub selected: bool,
    pub icon_px: u32,
    pub border_color: Option<String>,
    pub z_offset: i32,
    pub popup: String,
}

/// A crowd zone drawn as a translucent circle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneGraphic {
    pub name: String,
    pub center: GeoPoint,
    pub radius_m: f64,
    pub level: CrowdLevel,
    pub color: String,
    pub fill_opacity: f64,
    pub popup: String,
}

/// The resolved route drawn as a colored polyline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteGraphic {
    pub name: String,
    pub description: String,
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
    pub distance_m: i64,
    pub path: Vec<GeoPoint>,
}

/// Fire-and-forget camera transition toward a selected amenity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraFlyTo {
    pub target: GeoPoint,
    pub zoom: u8,
    pub duration_s: f64,
}

/// Everything the map front-end needs to draw one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapOverlay {
    pub center: GeoPoint,
    pub zoom: u8,
    pub tiles: TileLayer,
    pub markers: Vec<MarkerGraphic>,
    pub amenities: Vec<AmenityGraphic>,
    pub zones: Vec<ZoneGraphic>,
    pub route: Option<RouteGraphic>,
    pub camera: Option<CameraFlyTo>,
}

/// Build the overlay for the current view state.
pub fn build_overlay(
    tiles: TileLayer,
    zones: &[CrowdZone],
    session: &NavigationSession,
) -> MapOverlay {
    let center = registry::marker(MAP_CENTER_KEY)
        .map(|m| m.position)
        .unwrap_or(GeoPoint::new(0.0, 0.0));

    // Markers already represented by an amenity entry are skipped so they
    // are not drawn twice.
    let markers = MARKERS
        .iter()
        .filter(|m| !AMENITIES.iter().any(|a| a.marker_key == m.key))
        .map(|m| MarkerGraphic {
            key: m.key.to_string(),
            name: m.name.to_string(),
            kind: m.kind,
            position: m.position,
            popup: format!("{}: {}", m.kind.label(), m.name),
        })
        .collect();

    let selected = session.selected_amenity();
    let amenities = AMENITIES
        .iter()
        .filter_map(|a| registry::marker(a.marker_key).map(|m| (a, m)))
        .map(|(a, m)| {
            let is_selected = selected == Some(a.key);
            AmenityGraphic {
                key: a.key.to_string(),
                marker_key: a.marker_key.to_string(),
                name: m.name.to_string(),
                position: m.position,
                color: a.color.to_string(),
                selected: is_selected,
                icon_px: if is_selected {
                    AMENITY_ICON_SELECTED_PX
                } else {
                    AMENITY_ICON_PX
                },
                border_color: is_selected.then(|| SELECTED_BORDER_COLOR.to_string()),
                z_offset: if is_selected { SELECTED_Z_OFFSET } else { 0 },
                popup: m.name.to_string(),
            }
        })
        .collect();

    let zones = zones
        .iter()
        .map(|z| ZoneGraphic {
            name: z.name.clone(),
            center: z.center,
            radius_m: z.radius_m,
            level: z.level,
            color: z.color.clone(),
            fill_opacity: 0.3,
            popup: format!("Crowd level: {}", z.level),
        })
        .collect();

    // An invalid selection draws no route; the notice is the caller's job.
    let route = session.resolve().ok().flatten().map(route_graphic);

    let camera = selected
        .and_then(registry::amenity)
        .and_then(|a| registry::marker(a.marker_key))
        .map(|m| CameraFlyTo {
            target: m.position,
            zoom: FLY_TO_ZOOM,
            duration_s: FLY_TO_DURATION_S,
        });

    MapOverlay {
        center,
        zoom: DEFAULT_ZOOM,
        tiles,
        markers,
        amenities,
        zones,
        route,
        camera,
    }
}

fn route_graphic(route: ResolvedRoute) -> RouteGraphic {
    RouteGraphic {
        name: route.name,
        description: route.description,
        color: route.color,
        weight: 6,
        opacity: 0.8,
        distance_m: route.distance_m,
        path: route.path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crowd::CrowdField;

    fn tiles() -> TileLayer {
        TileLayer {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "(c) OpenStreetMap contributors".to_string(),
        }
    }

    #[test]
    fn amenity_markers_are_not_drawn_twice() {
        let field = CrowdField::new();
        let session = NavigationSession::default();
        let overlay = build_overlay(tiles(), field.zones(), &session);

        for amenity in &overlay.amenities {
            assert!(
                !overlay.markers.iter().any(|m| m.key == amenity.marker_key),
                "{} drawn as both marker and amenity",
                amenity.marker_key
            );
        }
        assert_eq!(overlay.amenities.len(), AMENITIES.len());
    }

    #[test]
    fn selected_amenity_is_highlighted_and_flown_to() {
        let field = CrowdField::new();
        let mut session = NavigationSession::default();
        session.select_amenity(Some("foodStall")).unwrap();
        let overlay = build_overlay(tiles(), field.zones(), &session);

        let food = overlay
            .amenities
            .iter()
            .find(|a| a.key == "foodStall")
            .unwrap();
        assert!(food.selected);
        assert_eq!(food.icon_px, AMENITY_ICON_SELECTED_PX);
        assert_eq!(food.border_color.as_deref(), Some(SELECTED_BORDER_COLOR));
        assert_eq!(food.z_offset, SELECTED_Z_OFFSET);

        let camera = overlay.camera.unwrap();
        assert_eq!(camera.target, food.position);
        assert_eq!(camera.zoom, FLY_TO_ZOOM);
        assert!(camera.duration_s <= FLY_TO_DURATION_S);

        let others = overlay.amenities.iter().filter(|a| a.key != "foodStall");
        for other in others {
            assert!(!other.selected);
            assert_eq!(other.icon_px, AMENITY_ICON_PX);
        }
    }

    #[test]
    fn route_polyline_follows_the_session() {
        let field = CrowdField::new();
        let session = NavigationSession::default();
        let overlay = build_overlay(tiles(), field.zones(), &session);
        let route = overlay.route.unwrap();
        assert_eq!(route.weight, 6);
        assert!(route.path.len() >= 2);

        // No route for an invalid selection.
        let mut same = NavigationSession::default();
        same.set_end("user").unwrap();
        let overlay = build_overlay(tiles(), field.zones(), &same);
        assert!(overlay.route.is_none());
    }

    #[test]
    fn zones_are_translucent_circles_with_severity_popup() {
        let field = CrowdField::new();
        let session = NavigationSession::default();
        let overlay = build_overlay(tiles(), field.zones(), &session);
        assert_eq!(overlay.zones.len(), field.zones().len());
        for zone in &overlay.zones {
            assert!((zone.fill_opacity - 0.3).abs() < f64::EPSILON);
            assert!(zone.popup.starts_with("Crowd level: "));
        }
    }
}
