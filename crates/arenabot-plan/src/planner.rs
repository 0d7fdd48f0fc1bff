//! Maneuver selection: convert the readiness checklists into a launch
//! plan, or decide that no strike can launch yet.

use log::debug;

use arenabot_core::constants::*;
use arenabot_core::enums::Posture;
use arenabot_core::types::{SpaceTime, VehicleState};
use arenabot_strike::readiness;

use crate::plan::Plan;
use crate::set_pieces;

/// Decide whether any strike can launch right now against `contact`,
/// and build its plan if so. `None` means keep driving; the checklists
/// are recomputed next tick against a fresh prediction.
///
/// The returned plan is parameterized by the same contact the checklist
/// was evaluated against, so its timing steps can never disagree with
/// the judgment that launched them.
pub fn plan_immediate_launch(
    vehicle: &VehicleState,
    contact: &SpaceTime,
    posture: Posture,
) -> Option<Plan> {
    let height = contact.space.z;

    if height >= NEEDS_AERIAL_THRESHOLD {
        let checklist = readiness::check_aerial_readiness(vehicle, contact);
        if checklist.ready() {
            debug!("aerial launch against contact at t={:.2}", contact.time);
            return Some(set_pieces::perform_aerial(*contact).with_posture(posture));
        }
        return None;
    }

    if readiness::check_jump_hit_readiness(vehicle, contact).ready() {
        if let Some(plan) = set_pieces::jump_hit(contact) {
            debug!("jump hit against contact at t={:.2}", contact.time);
            return Some(plan.with_posture(posture));
        }
    }

    if readiness::is_flip_hit_accessible(height)
        && readiness::check_flip_hit_readiness(vehicle, contact).ready()
    {
        debug!("flip hit against contact at t={:.2}", contact.time);
        return Some(set_pieces::front_flip().with_posture(posture));
    }

    None
}
