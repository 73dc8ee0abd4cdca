//! Core data models for the navigation service.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees. Immutable once defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Category of a registered point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    User,
    Temple,
    Ghat,
    Police,
    Ambulance,
    Amenity,
}

impl MarkerKind {
    /// Human-readable label used in map popups.
    pub fn label(&self) -> &'static str {
        match self {
            MarkerKind::User => "Your Location",
            MarkerKind::Temple => "Temple",
            MarkerKind::Ghat => "Ghat",
            MarkerKind::Police => "Police",
            MarkerKind::Ambulance => "Ambulance",
            MarkerKind::Amenity => "Amenity",
        }
    }
}

/// A named point of interest in the static registry.
///
/// Markers are keyed by stable string identifiers and referenced elsewhere
/// by key, never duplicated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarkerDef {
    pub key: &'static str,
    pub name: &'static str,
    pub kind: MarkerKind,
    pub position: GeoPoint,
}

/// An amenity shortcut shown alongside the map, referencing a marker by key.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AmenityDef {
    pub key: &'static str,
    pub marker_key: &'static str,
    /// Display color for the amenity icon.
    pub color: &'static str,
}

/// Crowd density severity for a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CrowdLevel::Low => "Low",
            CrowdLevel::Medium => "Medium",
            CrowdLevel::High => "High",
            CrowdLevel::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// Static seed for a crowd zone.
#[derive(Debug, Clone, Copy)]
pub struct ZoneDef {
    pub name: &'static str,
    pub center: GeoPoint,
    pub radius_m: f64,
    pub level: CrowdLevel,
    pub color: &'static str,
}

/// A live crowd zone. Identity, center, level and color never change after
/// creation; only the radius is perturbed by the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdZone {
    pub name: String,
    pub center: GeoPoint,
    pub radius_m: f64,
    pub level: CrowdLevel,
    pub color: String,
}

impl CrowdZone {
    pub fn from_def(def: &ZoneDef) -> Self {
        Self {
            name: def.name.to_string(),
            center: def.center,
            radius_m: def.radius_m,
            level: def.level,
            color: def.color.to_string(),
        }
    }
}

/// User's choice between the predefined route branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutePreference {
    #[default]
    Ai,
    Shortest,
}

/// A predefined walking route from the user position to one destination.
///
/// `name` and `description` are templates; `{start}` and `{end}` are replaced
/// with the resolved marker names at selection time.
#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub destination: &'static str,
    pub preference: RoutePreference,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub path: &'static [GeoPoint],
}

/// A route resolved for the current selection. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRoute {
    pub name: String,
    pub description: String,
    pub color: String,
    pub path: Vec<GeoPoint>,
    /// Total length of the polyline in whole meters.
    pub distance_m: i64,
}
