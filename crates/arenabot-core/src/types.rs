//! Fundamental geometric and snapshot types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// A predicted contact: where the strike happens and when.
///
/// Produced by the external trajectory predictor, recomputed fresh every
/// tick (the target's path can change discontinuously after a bounce).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpaceTime {
    /// Contact position (meters).
    pub space: DVec3,
    /// Absolute game time of the contact (seconds).
    pub time: f64,
}

impl SpaceTime {
    pub fn new(space: DVec3, time: f64) -> Self {
        Self { space, time }
    }
}

/// Vehicle orientation as an orthonormal basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Forward-facing direction.
    pub nose: DVec3,
    /// Up direction of the chassis.
    pub roof: DVec3,
    /// Right-hand direction (`nose × roof`).
    pub right: DVec3,
}

impl Orientation {
    pub fn new(nose: DVec3, roof: DVec3) -> Self {
        Self {
            nose,
            roof,
            right: nose.cross(roof),
        }
    }

    /// Level orientation facing east (+x).
    pub fn upright() -> Self {
        Self::new(DVec3::X, DVec3::Z)
    }
}

/// Per-tick snapshot of the vehicle. Refreshed wholesale every tick by
/// the transport layer; never mutated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    pub position: DVec3,
    pub velocity: DVec3,
    pub angular_velocity: DVec3,
    pub orientation: Orientation,
    /// Boost resource, 0..=100.
    pub boost: f64,
    /// Timestamp of this snapshot (seconds).
    pub time: f64,
}

impl VehicleState {
    /// Signed ground-plane angle from the nose to `target` (radians,
    /// positive = target is counter-clockwise of the nose seen from above).
    pub fn correction_angle_to(&self, target: DVec3) -> f64 {
        let to_target = target - self.position;
        let nose = self.orientation.nose;
        let cross = nose.x * to_target.y - nose.y * to_target.x;
        let dot = nose.x * to_target.x + nose.y * to_target.y;
        cross.atan2(dot)
    }

    /// Roof vector close enough to world-up to treat the vehicle as level.
    pub fn is_upright(&self) -> bool {
        self.orientation.roof.dot(DVec3::Z) > UPRIGHT_ROOF_MIN
    }

    /// Wheels on the floor, within a little wiggle room.
    pub fn is_on_ground(&self) -> bool {
        self.position.z < RESTING_HEIGHT + GROUND_EPSILON
    }

    /// Seconds from this snapshot to a future game time.
    pub fn seconds_until(&self, time: f64) -> f64 {
        time - self.time
    }
}

/// Everything a step sees in one tick.
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    pub vehicle: VehicleState,
    /// Current target (ball) position, for fallback pursuit.
    pub target_position: DVec3,
}
