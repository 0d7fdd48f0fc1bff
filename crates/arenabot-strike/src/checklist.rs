//! Go/no-go checklists: independent boolean preconditions per maneuver
//! class. Each field is computed from its own slice of the input — none
//! is derived from another field's truth value.

use serde::{Deserialize, Serialize};

/// Preconditions shared by every launch-style maneuver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchChecklist {
    /// Correction angle to the contact point is within tolerance.
    pub lined_up: bool,
    /// Contact is close enough in time to commit a plan against.
    pub close_enough: bool,
    /// Contact height is reachable by some elevated strike in the time left.
    pub within_reach: bool,
    /// Inside the ignition window — launching now arrives on schedule.
    pub time_for_ignition: bool,
    /// Roof pointing up.
    pub upright: bool,
    /// Wheels on the floor.
    pub on_the_ground: bool,
}

impl LaunchChecklist {
    /// A maneuver is ready iff every precondition holds.
    pub fn ready(&self) -> bool {
        self.lined_up
            && self.close_enough
            && self.within_reach
            && self.time_for_ignition
            && self.upright
            && self.on_the_ground
    }
}

/// Aerial variant: the launch preconditions plus boost and skid gates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AerialChecklist {
    pub launch: LaunchChecklist,
    /// Velocity nearly parallel to the nose — no lateral skid.
    pub not_skidding: bool,
    /// Enough boost in the tank for the climb.
    pub has_boost: bool,
}

impl AerialChecklist {
    pub fn ready(&self) -> bool {
        self.launch.ready() && self.not_skidding && self.has_boost
    }
}
