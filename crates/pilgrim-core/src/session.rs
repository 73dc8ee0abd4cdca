//! Per-visitor navigation state.
//!
//! Owns the user-facing selection (start, end, preference, selected amenity,
//! custom-route flag) and enforces the reset rules around it. The resolved
//! route is always derived on demand, never stored.

use serde::Serialize;

use crate::models::{ResolvedRoute, RoutePreference};
use crate::registry::{self, MAP_CENTER_KEY, USER_KEY};
use crate::routing::{self, SelectionError};

/// Selection state for one navigation view.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationSession {
    #[serde(rename = "start")]
    start_key: String,
    #[serde(rename = "end")]
    end_key: String,
    preference: RoutePreference,
    custom_route_active: bool,
    selected_amenity: Option<String>,
}

impl Default for NavigationSession {
    fn default() -> Self {
        Self {
            start_key: USER_KEY.to_string(),
            end_key: MAP_CENTER_KEY.to_string(),
            preference: RoutePreference::Ai,
            custom_route_active: false,
            selected_amenity: None,
        }
    }
}

impl NavigationSession {
    pub fn start_key(&self) -> &str {
        &self.start_key
    }

    pub fn end_key(&self) -> &str {
        &self.end_key
    }

    pub fn preference(&self) -> RoutePreference {
        self.preference
    }

    pub fn custom_route_active(&self) -> bool {
        self.custom_route_active
    }

    pub fn selected_amenity(&self) -> Option<&str> {
        self.selected_amenity.as_deref()
    }

    /// Whether the predefined route tables apply to the current start.
    pub fn is_ai_routable(&self) -> bool {
        routing::is_ai_routable(&self.start_key)
    }

    /// Change the start point. Any endpoint change deactivates a previously
    /// triggered custom route and reverts the preference to the default.
    pub fn set_start(&mut self, key: &str) -> Result<(), SelectionError> {
        Self::known(key)?;
        self.start_key = key.to_string();
        self.reset_route_choice();
        Ok(())
    }

    /// Change the end point. Same reset rules as `set_start`.
    pub fn set_end(&mut self, key: &str) -> Result<(), SelectionError> {
        Self::known(key)?;
        self.end_key = key.to_string();
        self.reset_route_choice();
        Ok(())
    }

    /// Change the route preference. Only available while AI-routable; also
    /// forces the user to re-trigger "find route" afterwards.
    pub fn set_preference(&mut self, preference: RoutePreference) -> Result<(), SelectionError> {
        if !self.is_ai_routable() {
            return Err(SelectionError::PreferenceUnavailable);
        }
        self.preference = preference;
        self.custom_route_active = false;
        Ok(())
    }

    /// Explicit "find route" action. Blocks on an invalid selection; for a
    /// non-user start this is what activates the schematic path.
    pub fn find_route(&mut self) -> Result<(), SelectionError> {
        if self.start_key == self.end_key {
            return Err(SelectionError::SameStartAndEnd);
        }
        if !self.is_ai_routable() {
            self.custom_route_active = true;
        }
        Ok(())
    }

    /// Select an amenity, or toggle it off when it is already selected.
    /// Passing `None` clears the selection.
    pub fn select_amenity(&mut self, key: Option<&str>) -> Result<(), SelectionError> {
        match key {
            None => self.selected_amenity = None,
            Some(key) => {
                if registry::amenity(key).is_none() {
                    return Err(SelectionError::UnknownMarker {
                        key: key.to_string(),
                    });
                }
                if self.selected_amenity.as_deref() == Some(key) {
                    self.selected_amenity = None;
                } else {
                    self.selected_amenity = Some(key.to_string());
                }
            }
        }
        Ok(())
    }

    /// Resolve the current selection. Recomputed fully on every call.
    pub fn resolve(&self) -> Result<Option<ResolvedRoute>, SelectionError> {
        routing::resolve_route(
            &self.start_key,
            &self.end_key,
            self.preference,
            self.custom_route_active,
        )
    }

    fn reset_route_choice(&mut self) {
        self.custom_route_active = false;
        self.preference = RoutePreference::Ai;
    }

    fn known(key: &str) -> Result<(), SelectionError> {
        registry::marker(key)
            .map(|_| ())
            .ok_or_else(|| SelectionError::UnknownMarker {
                key: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_the_stored_ai_route() {
        let session = NavigationSession::default();
        assert_eq!(session.start_key(), "user");
        assert_eq!(session.end_key(), "mahakaleshwar");
        let route = session.resolve().unwrap().unwrap();
        let stored = registry::predefined_route("mahakaleshwar", RoutePreference::Ai).unwrap();
        assert_eq!(route.color, stored.color);
        assert_eq!(route.path, stored.path.to_vec());
    }

    #[test]
    fn endpoint_change_resets_preference_and_custom_flag() {
        let mut session = NavigationSession::default();
        session.set_preference(RoutePreference::Shortest).unwrap();
        assert_eq!(session.preference(), RoutePreference::Shortest);

        session.set_end("ramGhat").unwrap();
        assert_eq!(session.preference(), RoutePreference::Ai);
        assert!(!session.custom_route_active());

        session.set_start("policeStation1").unwrap();
        session.find_route().unwrap();
        assert!(session.custom_route_active());

        // Changing either endpoint forces a fresh "find route".
        session.set_end("mahakaleshwar").unwrap();
        assert!(!session.custom_route_active());
    }

    #[test]
    fn preference_is_disabled_for_non_user_start() {
        let mut session = NavigationSession::default();
        session.set_start("ramGhat").unwrap();
        let err = session.set_preference(RoutePreference::Shortest).unwrap_err();
        assert_eq!(err, SelectionError::PreferenceUnavailable);
    }

    #[test]
    fn find_route_blocks_same_endpoints() {
        let mut session = NavigationSession::default();
        session.set_end("user").unwrap();
        let err = session.find_route().unwrap_err();
        assert_eq!(err, SelectionError::SameStartAndEnd);
        assert!(!session.custom_route_active());
        assert_eq!(session.resolve().unwrap_err(), SelectionError::SameStartAndEnd);
    }

    #[test]
    fn custom_route_flow_for_non_user_start() {
        let mut session = NavigationSession::default();
        session.set_start("policeStation1").unwrap();
        assert!(session.resolve().unwrap().is_none());

        session.find_route().unwrap();
        let route = session.resolve().unwrap().unwrap();
        assert_eq!(route.path.len(), 3);
        assert_eq!(route.color, routing::FALLBACK_CUSTOM_COLOR);
    }

    #[test]
    fn amenity_selection_toggles() {
        let mut session = NavigationSession::default();
        session.select_amenity(Some("waterStation")).unwrap();
        assert_eq!(session.selected_amenity(), Some("waterStation"));
        session.select_amenity(Some("waterStation")).unwrap();
        assert_eq!(session.selected_amenity(), None);

        let err = session.select_amenity(Some("teaStall")).unwrap_err();
        assert!(matches!(err, SelectionError::UnknownMarker { .. }));
    }

    #[test]
    fn unknown_endpoints_are_rejected_without_state_change() {
        let mut session = NavigationSession::default();
        let err = session.set_end("nowhere").unwrap_err();
        assert!(matches!(err, SelectionError::UnknownMarker { .. }));
        assert_eq!(session.end_key(), "mahakaleshwar");
    }
}
