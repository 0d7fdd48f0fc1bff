//! Closed-form timing for jump and aerial ascents.
//!
//! These curves are the `T(height)` functions behind every launch
//! countdown: monotonically increasing in height, cheap enough to call
//! per tick per candidate maneuver.

use crate::constants::*;

/// Time to reach `height` during a held ("mashed") jump from rest.
///
/// Solves `resting + v0·t − a/2·t²  =  height` for the ascending root,
/// where `a = GRAVITY - JUMP_ASSIST`. Returns `None` above the mash-jump
/// apex and `Some(0.0)` at or below resting height.
pub fn seconds_to_mash_jump_height(height: f64) -> Option<f64> {
    if height <= RESTING_HEIGHT {
        return Some(0.0);
    }
    let a = GRAVITY - JUMP_ASSIST;
    let discriminant = JUMP_IMPULSE * JUMP_IMPULSE - 2.0 * a * (height - RESTING_HEIGHT);
    if discriminant < 0.0 {
        return None;
    }
    Some((JUMP_IMPULSE - discriminant.sqrt()) / a)
}

/// Time for a boost-assisted aerial to climb to `height` at the modelled
/// constant rise rate. Zero at or below resting height.
pub fn seconds_to_aerial_height(height: f64) -> f64 {
    ((height - RESTING_HEIGHT) / AERIAL_RISE_RATE).max(0.0)
}
