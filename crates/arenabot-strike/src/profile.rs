//! Strike profiles — fixed time-cost and effect descriptions of terminal
//! strike actions, consumed by the readiness countdowns and plan builders.

use arenabot_core::constants::*;
use arenabot_core::enums::StrikeStyle;
use arenabot_core::motion;

/// Time/effect description of one strike style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikeProfile {
    /// Setup time before the dodge fires: ascent for elevated hits, zero
    /// for ground flips (seconds).
    pub maneuver_seconds: f64,
    /// Forward speed gained when the dodge fires (m/s).
    pub speed_boost: f64,
    /// Duration of the dodge itself (seconds).
    pub dodge_seconds: f64,
    pub style: StrikeStyle,
}

impl StrikeProfile {
    /// Total time cost from ignition to contact.
    pub fn total_seconds(&self) -> f64 {
        self.maneuver_seconds + self.dodge_seconds
    }
}

/// Ground-level flip strike: no ascent, the dodge dominates.
pub const FLIP_HIT: StrikeProfile = StrikeProfile {
    maneuver_seconds: 0.0,
    speed_boost: 10.0,
    dodge_seconds: 0.4,
    style: StrikeStyle::FlipHit,
};

/// Jump strike sized for a contact at `height`. Infinite setup cost when
/// the height is beyond the mash-jump apex.
pub fn jump_hit(height: f64) -> StrikeProfile {
    StrikeProfile {
        maneuver_seconds: motion::seconds_to_mash_jump_height(height).unwrap_or(f64::INFINITY),
        speed_boost: 10.0,
        dodge_seconds: 0.4,
        style: StrikeStyle::JumpHit,
    }
}

/// Sideways dodge strike: same ascent budget as a jump hit.
pub fn side_flip(height: f64) -> StrikeProfile {
    StrikeProfile {
        maneuver_seconds: motion::seconds_to_mash_jump_height(height).unwrap_or(f64::INFINITY),
        speed_boost: 10.0,
        dodge_seconds: 0.4,
        style: StrikeStyle::SideFlip,
    }
}

/// Aerial strike sized for a contact at `height`: constant-rate ascent,
/// no dodge.
pub fn aerial(height: f64) -> StrikeProfile {
    StrikeProfile {
        maneuver_seconds: motion::seconds_to_aerial_height(height),
        speed_boost: 0.0,
        dodge_seconds: 0.0,
        style: StrikeStyle::Aerial,
    }
}

/// The cheapest strike style that reaches a contact at `height`, or
/// `None` when the contact is drivable without leaving the ground.
pub fn recommended_style(height: f64) -> Option<StrikeStyle> {
    if height >= NEEDS_AERIAL_THRESHOLD {
        Some(StrikeStyle::Aerial)
    } else if height > NEEDS_JUMP_HIT_THRESHOLD {
        Some(StrikeStyle::JumpHit)
    } else if height > NEEDS_FLIP_THRESHOLD {
        Some(StrikeStyle::FlipHit)
    } else {
        None
    }
}
