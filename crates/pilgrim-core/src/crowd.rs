//! Crowd zone simulation.
//!
//! Emulates a live density feed by perturbing each zone's radius on a fixed
//! cadence. The field is an explicitly owned object: its owner decides when
//! to tick and when to drop it, and readers take snapshots.

use rand::Rng;

use crate::models::CrowdZone;
use crate::registry::CROWD_ZONES;

/// Radius never drops below this floor, in meters.
pub const RADIUS_FLOOR_M: f64 = 20.0;

/// Maximum radius change per tick, in meters, in either direction.
pub const MAX_STEP_M: f64 = 5.0;

/// The set of live crowd zones for one navigation view.
#[derive(Debug, Clone)]
pub struct CrowdField {
    zones: Vec<CrowdZone>,
}

impl CrowdField {
    /// Seed the field from the registry's zone table.
    pub fn new() -> Self {
        Self {
            zones: CROWD_ZONES.iter().map(CrowdZone::from_def).collect(),
        }
    }

    /// Advance the simulation one step: every radius moves by a uniform
    /// delta in [-MAX_STEP_M, +MAX_STEP_M], clamped to the floor.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for zone in &mut self.zones {
            let delta = rng.random_range(-MAX_STEP_M..=MAX_STEP_M);
            zone.radius_m = (zone.radius_m + delta).max(RADIUS_FLOOR_M);
        }
    }

    /// Snapshot of the current zones.
    pub fn zones(&self) -> &[CrowdZone] {
        &self.zones
    }

    /// Owned snapshot for broadcasting to subscribers.
    pub fn snapshot(&self) -> Vec<CrowdZone> {
        self.zones.clone()
    }
}

impl Default for CrowdField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn radius_never_drops_below_floor() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = CrowdField::new();
        for _ in 0..500 {
            field.tick(&mut rng);
            for zone in field.zones() {
                assert!(zone.radius_m >= RADIUS_FLOOR_M, "{}", zone.name);
            }
        }
    }

    #[test]
    fn identity_and_center_are_stable() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = CrowdField::new();
        let before = field.snapshot();
        for _ in 0..50 {
            field.tick(&mut rng);
        }
        for (seed, live) in before.iter().zip(field.zones()) {
            assert_eq!(seed.name, live.name);
            assert_eq!(seed.center, live.center);
            assert_eq!(seed.level, live.level);
            assert_eq!(seed.color, live.color);
        }
    }

    #[test]
    fn step_is_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = CrowdField::new();
        let before = field.snapshot();
        field.tick(&mut rng);
        for (old, new) in before.iter().zip(field.zones()) {
            assert!((new.radius_m - old.radius_m).abs() <= MAX_STEP_M + f64::EPSILON);
        }
    }
}
