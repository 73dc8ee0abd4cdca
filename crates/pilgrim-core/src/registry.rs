//! Static geographic registry for the Ujjain Simhastha area.
//!
//! Markers, amenities, crowd zone seeds, and the predefined user routes are
//! compiled-in constant tables. Everything references markers by key; the
//! tables are never mutated at runtime.

use crate::models::{
    AmenityDef, CrowdLevel, GeoPoint, MarkerDef, MarkerKind, RouteDef, RoutePreference, ZoneDef,
};

/// Key of the fixed user-position marker. Routes starting here are
/// "AI-routable" and may use the predefined route tables.
pub const USER_KEY: &str = "user";

/// Marker the map is centered on by default.
pub const MAP_CENTER_KEY: &str = "mahakaleshwar";

pub const MARKERS: &[MarkerDef] = &[
    MarkerDef {
        key: USER_KEY,
        name: "Your Location",
        kind: MarkerKind::User,
        position: GeoPoint::new(23.1765, 75.7885),
    },
    MarkerDef {
        key: "mahakaleshwar",
        name: "Mahakaleshwar Temple",
        kind: MarkerKind::Temple,
        position: GeoPoint::new(23.1828, 75.7682),
    },
    MarkerDef {
        key: "harsiddhi",
        name: "Harsiddhi Temple",
        kind: MarkerKind::Temple,
        position: GeoPoint::new(23.1834, 75.7622),
    },
    MarkerDef {
        key: "kalBhairav",
        name: "Kal Bhairav Temple",
        kind: MarkerKind::Temple,
        position: GeoPoint::new(23.2129, 75.7560),
    },
    MarkerDef {
        key: "ramGhat",
        name: "Ram Ghat",
        kind: MarkerKind::Ghat,
        position: GeoPoint::new(23.1890, 75.7664),
    },
    MarkerDef {
        key: "dattaAkhara",
        name: "Datta Akhara Ghat",
        kind: MarkerKind::Ghat,
        position: GeoPoint::new(23.1918, 75.7611),
    },
    MarkerDef {
        key: "policeStation1",
        name: "Mahakal Police Chowki",
        kind: MarkerKind::Police,
        position: GeoPoint::new(23.1812, 75.7696),
    },
    MarkerDef {
        key: "policeStation2",
        name: "Ram Ghat Police Outpost",
        kind: MarkerKind::Police,
        position: GeoPoint::new(23.1884, 75.7679),
    },
    MarkerDef {
        key: "ambulance1",
        name: "Harsiddhi Ambulance Point",
        kind: MarkerKind::Ambulance,
        position: GeoPoint::new(23.1841, 75.7630),
    },
    MarkerDef {
        key: "waterStation1",
        name: "Mahakal Gate Water Station",
        kind: MarkerKind::Amenity,
        position: GeoPoint::new(23.1820, 75.7674),
    },
    MarkerDef {
        key: "foodStall1",
        name: "Annakshetra Food Stall",
        kind: MarkerKind::Amenity,
        position: GeoPoint::new(23.1847, 75.7668),
    },
];

/// Amenity shortcuts shown next to the map. Each references a marker by key;
/// the overlay renders these with dedicated icons instead of plain markers.
pub const AMENITIES: &[AmenityDef] = &[
    AmenityDef {
        key: "waterStation",
        marker_key: "waterStation1",
        color: "#06b6d4",
    },
    AmenityDef {
        key: "foodStall",
        marker_key: "foodStall1",
        color: "#eab308",
    },
    AmenityDef {
        key: "policeStationAmenity",
        marker_key: "policeStation1",
        color: "#3b82f6",
    },
    AmenityDef {
        key: "ambulanceAmenity",
        marker_key: "ambulance1",
        color: "#ef4444",
    },
];

/// Seed data for the live crowd zones.
pub const CROWD_ZONES: &[ZoneDef] = &[
    ZoneDef {
        name: "Mahakaleshwar Queue",
        center: GeoPoint::new(23.1824, 75.7685),
        radius_m: 60.0,
        level: CrowdLevel::Critical,
        color: "#ef4444",
    },
    ZoneDef {
        name: "Ram Ghat Approach",
        center: GeoPoint::new(23.1885, 75.7660),
        radius_m: 80.0,
        level: CrowdLevel::High,
        color: "#f97316",
    },
    ZoneDef {
        name: "Harsiddhi Court",
        center: GeoPoint::new(23.1836, 75.7625),
        radius_m: 50.0,
        level: CrowdLevel::Medium,
        color: "#eab308",
    },
    ZoneDef {
        name: "Freeganj Market",
        center: GeoPoint::new(23.1867, 75.7773),
        radius_m: 70.0,
        level: CrowdLevel::Low,
        color: "#22c55e",
    },
];

const MAHAKAL_AI_PATH: &[GeoPoint] = &[
    GeoPoint::new(23.1765, 75.7885),
    GeoPoint::new(23.1782, 75.7820),
    GeoPoint::new(23.1800, 75.7760),
    GeoPoint::new(23.1815, 75.7710),
    GeoPoint::new(23.1828, 75.7682),
];

const MAHAKAL_SHORT_PATH: &[GeoPoint] = &[
    GeoPoint::new(23.1765, 75.7885),
    GeoPoint::new(23.1796, 75.7790),
    GeoPoint::new(23.1820, 75.7700),
    GeoPoint::new(23.1828, 75.7682),
];

const RAM_GHAT_AI_PATH: &[GeoPoint] = &[
    GeoPoint::new(23.1765, 75.7885),
    GeoPoint::new(23.1800, 75.7810),
    GeoPoint::new(23.1840, 75.7740),
    GeoPoint::new(23.1870, 75.7690),
    GeoPoint::new(23.1890, 75.7664),
];

const RAM_GHAT_SHORT_PATH: &[GeoPoint] = &[
    GeoPoint::new(23.1765, 75.7885),
    GeoPoint::new(23.1830, 75.7770),
    GeoPoint::new(23.1868, 75.7700),
    GeoPoint::new(23.1890, 75.7664),
];

const HARSIDDHI_AI_PATH: &[GeoPoint] = &[
    GeoPoint::new(23.1765, 75.7885),
    GeoPoint::new(23.1790, 75.7800),
    GeoPoint::new(23.1812, 75.7730),
    GeoPoint::new(23.1828, 75.7668),
    GeoPoint::new(23.1836, 75.7640),
    GeoPoint::new(23.1834, 75.7622),
];

const HARSIDDHI_SHORT_PATH: &[GeoPoint] = &[
    GeoPoint::new(23.1765, 75.7885),
    GeoPoint::new(23.1805, 75.7760),
    GeoPoint::new(23.1825, 75.7680),
    GeoPoint::new(23.1834, 75.7622),
];

/// Predefined routes from the user position, keyed by destination then
/// preference. Destinations without entries fall back to a schematic path.
pub const USER_ROUTES: &[RouteDef] = &[
    RouteDef {
        destination: "mahakaleshwar",
        preference: RoutePreference::Ai,
        name: "AI Recommended Route",
        description: "Crowd-aware walking route from {start} to {end}, entering through the temple's north gate.",
        color: "#3b82f6",
        path: MAHAKAL_AI_PATH,
    },
    RouteDef {
        destination: "mahakaleshwar",
        preference: RoutePreference::Shortest,
        name: "Shortest Path",
        description: "The most direct walking route from {start} to {end}.",
        color: "#8b5cf6",
        path: MAHAKAL_SHORT_PATH,
    },
    RouteDef {
        destination: "ramGhat",
        preference: RoutePreference::Ai,
        name: "AI Recommended Route",
        description: "Crowd-aware walking route from {start} to {end} along the Shipra embankment.",
        color: "#3b82f6",
        path: RAM_GHAT_AI_PATH,
    },
    RouteDef {
        destination: "ramGhat",
        preference: RoutePreference::Shortest,
        name: "Shortest Path",
        description: "The most direct walking route from {start} to {end}.",
        color: "#8b5cf6",
        path: RAM_GHAT_SHORT_PATH,
    },
    RouteDef {
        destination: "harsiddhi",
        preference: RoutePreference::Ai,
        name: "AI Recommended Route",
        description: "Crowd-aware walking route from {start} to {end}, skirting the Mahakaleshwar queue.",
        color: "#3b82f6",
        path: HARSIDDHI_AI_PATH,
    },
    RouteDef {
        destination: "harsiddhi",
        preference: RoutePreference::Shortest,
        name: "Shortest Path",
        description: "The most direct walking route from {start} to {end}.",
        color: "#8b5cf6",
        path: HARSIDDHI_SHORT_PATH,
    },
];

/// Look up a marker by key.
pub fn marker(key: &str) -> Option<&'static MarkerDef> {
    MARKERS.iter().find(|m| m.key == key)
}

/// Look up an amenity by key.
pub fn amenity(key: &str) -> Option<&'static AmenityDef> {
    AMENITIES.iter().find(|a| a.key == key)
}

/// Look up the predefined route for a destination and preference.
pub fn predefined_route(
    destination: &str,
    preference: RoutePreference,
) -> Option<&'static RouteDef> {
    USER_ROUTES
        .iter()
        .find(|r| r.destination == destination && r.preference == preference)
}

/// Whether any predefined route exists for a destination.
pub fn has_predefined_routes(destination: &str) -> bool {
    USER_ROUTES.iter().any(|r| r.destination == destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_keys_are_unique() {
        for (i, a) in MARKERS.iter().enumerate() {
            for b in &MARKERS[i + 1..] {
                assert_ne!(a.key, b.key, "duplicate marker key {}", a.key);
            }
        }
    }

    #[test]
    fn amenities_reference_existing_markers() {
        for a in AMENITIES {
            assert!(marker(a.marker_key).is_some(), "dangling {}", a.marker_key);
        }
    }

    #[test]
    fn predefined_destinations_have_both_branches() {
        for r in USER_ROUTES {
            assert!(marker(r.destination).is_some());
            let ai = predefined_route(r.destination, RoutePreference::Ai).unwrap();
            let shortest = predefined_route(r.destination, RoutePreference::Shortest).unwrap();
            assert!(ai.path.len() >= 2);
            assert!(shortest.path.len() >= 2);
            assert_ne!(ai.path, shortest.path);
        }
    }

    #[test]
    fn routes_start_at_user_and_end_at_destination() {
        let user = marker(USER_KEY).unwrap();
        for r in USER_ROUTES {
            let dest = marker(r.destination).unwrap();
            assert_eq!(r.path.first(), Some(&user.position));
            assert_eq!(r.path.last(), Some(&dest.position));
        }
    }
}
