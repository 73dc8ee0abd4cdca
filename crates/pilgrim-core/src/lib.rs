pub mod crowd;
pub mod geo;
pub mod models;
pub mod overlay;
pub mod registry;
pub mod routing;
pub mod session;

pub use crowd::CrowdField;
pub use models::{
    AmenityDef, CrowdLevel, CrowdZone, GeoPoint, MarkerDef, MarkerKind, ResolvedRoute, RouteDef,
    RoutePreference, ZoneDef,
};
pub use overlay::{build_overlay, MapOverlay, TileLayer};
pub use routing::{is_ai_routable, resolve_route, SelectionError, SAME_POINT_NOTICE};
pub use session::NavigationSession;
