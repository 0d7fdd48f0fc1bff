//! Readiness evaluation — closed-form timing and geometry checks mapping
//! `(vehicle state, predicted contact)` to accessibility judgments and
//! populated checklists.
//!
//! Failure is data here: an unreachable maneuver reports `false` or an
//! unmet field, never an error.

use arenabot_core::constants::*;
use arenabot_core::motion;
use arenabot_core::types::{SpaceTime, VehicleState};

use crate::checklist::{AerialChecklist, LaunchChecklist};
use crate::profile;

/// Populate the aerial checklist for a predicted contact.
pub fn check_aerial_readiness(vehicle: &VehicleState, contact: &SpaceTime) -> AerialChecklist {
    let travel_dir = vehicle.velocity.normalize_or_zero();
    AerialChecklist {
        launch: check_launch_readiness(vehicle, contact),
        not_skidding: travel_dir.dot(vehicle.orientation.nose) > SKID_DOT_MIN,
        has_boost: vehicle.boost >= BOOST_NEEDED_FOR_AERIAL,
    }
}

/// Populate the jump-hit checklist. The ignition window is the mash-jump
/// ascent to the contact height plus the dodge that follows it.
pub fn check_jump_hit_readiness(vehicle: &VehicleState, contact: &SpaceTime) -> LaunchChecklist {
    let mut checklist = check_launch_readiness(vehicle, contact);
    let ascent =
        motion::seconds_to_mash_jump_height(contact.space.z).unwrap_or(f64::INFINITY);
    let window = ascent + profile::FLIP_HIT.dodge_seconds;
    checklist.time_for_ignition = vehicle.seconds_until(contact.time) < window;
    checklist
}

/// Populate the flip-hit checklist. Flips are strictly ground-level, so
/// vertical reach is moot and the ignition window is the dodge alone.
pub fn check_flip_hit_readiness(vehicle: &VehicleState, contact: &SpaceTime) -> LaunchChecklist {
    let mut checklist = check_launch_readiness(vehicle, contact);
    checklist.within_reach = true;
    checklist.time_for_ignition =
        vehicle.seconds_until(contact.time) < profile::FLIP_HIT.dodge_seconds;
    checklist
}

fn check_launch_readiness(vehicle: &VehicleState, contact: &SpaceTime) -> LaunchChecklist {
    let correction = vehicle.correction_angle_to(contact.space);
    let seconds_till = vehicle.seconds_until(contact.time);
    let t_minus = aerial_launch_countdown(contact.space.z, seconds_till);

    LaunchChecklist {
        lined_up: correction.abs() < ALIGNMENT_TOLERANCE,
        close_enough: seconds_till < PLAN_COMMIT_HORIZON,
        within_reach: is_vertically_accessible(vehicle, contact),
        time_for_ignition: t_minus < LAUNCH_SLACK,
        upright: vehicle.is_upright(),
        on_the_ground: vehicle.is_on_ground(),
    }
}

/// Umbrella vertical-reach check: the single gate the tactical layer
/// consults before committing to any elevated strike. Below the aerial
/// threshold this defers to the jump countdown; at or above it, to the
/// boost-gated aerial countdown. Exactly one sub-check is consulted for
/// any given height.
pub fn is_vertically_accessible(vehicle: &VehicleState, contact: &SpaceTime) -> bool {
    let seconds_till = vehicle.seconds_until(contact.time);

    if contact.space.z < NEEDS_AERIAL_THRESHOLD {
        return jump_launch_countdown(contact.space.z, seconds_till) >= -INACCESSIBLE_SLACK;
    }

    if vehicle.boost > BOOST_NEEDED_FOR_AERIAL {
        return aerial_launch_countdown(contact.space.z, seconds_till) >= -INACCESSIBLE_SLACK;
    }
    false
}

/// Jump-hit accessibility: under the mash-jump ceiling and still inside
/// the jump launch countdown.
pub fn is_jump_hit_accessible(vehicle: &VehicleState, contact: &SpaceTime) -> bool {
    if contact.space.z > MAX_JUMP_HIT {
        return false;
    }
    let seconds_till = vehicle.seconds_until(contact.time);
    jump_launch_countdown(contact.space.z, seconds_till) >= -INACCESSIBLE_SLACK
}

/// Side-flip accessibility: a distinct maneuver with identical gating to
/// the jump hit — they differ only in the steps they drive.
pub fn is_side_flip_accessible(vehicle: &VehicleState, contact: &SpaceTime) -> bool {
    if contact.space.z > MAX_JUMP_HIT {
        return false;
    }
    let seconds_till = vehicle.seconds_until(contact.time);
    jump_launch_countdown(contact.space.z, seconds_till) >= -INACCESSIBLE_SLACK
}

/// Flip-hit accessibility is a pure height ceiling; its execution time is
/// dominated by the fixed dodge, not by ascent.
pub fn is_flip_hit_accessible(height: f64) -> bool {
    height <= MAX_FLIP_HIT
}

/// Signed margin between now and the latest instant an aerial can still
/// launch and arrive on schedule.
pub fn aerial_launch_countdown(height: f64, seconds_till_contact: f64) -> f64 {
    seconds_till_contact - motion::seconds_to_aerial_height(height)
}

/// Signed margin for a mash-jump launch. Negative infinity when the
/// height is beyond the jump apex.
pub fn jump_launch_countdown(height: f64, seconds_till_contact: f64) -> f64 {
    let ascent = motion::seconds_to_mash_jump_height(height).unwrap_or(f64::INFINITY);
    seconds_till_contact - ascent
}

/// Boost available for ground travel after reserving the aerial minimum.
pub fn boost_budget(vehicle: &VehicleState) -> f64 {
    vehicle.boost - BOOST_NEEDED_FOR_AERIAL - BOOST_BUDGET_RESERVE
}
