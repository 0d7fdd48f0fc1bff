//! The current-plan slot and its interruption rules.
//!
//! Exactly one plan is current at a time; the arbiter is its exclusive
//! owner. Replacement is synchronous and total — a discarded plan's
//! remaining steps are dropped silently, with no cleanup callback.

use glam::DVec3;
use log::info;

use arenabot_core::controls::Controls;
use arenabot_core::enums::Posture;
use arenabot_core::types::{TickInput, VehicleState};

use crate::plan::Plan;
use crate::posture;

/// Closed-loop locomotion collaborator: immediate ground steering plus
/// an optional committed traversal flip. Path-following kinematics live
/// behind this boundary, outside the engine.
pub trait Steering {
    /// Immediately applicable steering toward a ground position.
    fn steer_toward(&self, vehicle: &VehicleState, target: DVec3) -> Controls;

    /// A committed traversal flip toward the target, when sensible.
    fn sensible_flip(&self, _vehicle: &VehicleState, _target: DVec3) -> Option<Plan> {
        None
    }
}

/// Exclusive owner of the single current plan.
#[derive(Debug, Default)]
pub struct Arbiter {
    current: Option<Plan>,
}

impl Arbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Plan> {
        self.current.as_ref()
    }

    /// Whether a plan with `posture` would be allowed to take over right
    /// now.
    pub fn can_interrupt_for(&self, posture: Posture) -> bool {
        match &self.current {
            None => true,
            Some(plan) => {
                plan.is_complete()
                    || (plan.can_interrupt() && posture::dominates(posture, plan.posture()))
            }
        }
    }

    /// True if an incomplete plan with this posture currently holds the
    /// slot. Guards e.g. re-installing a kickoff over a kickoff.
    pub fn holds_posture(&self, posture: Posture) -> bool {
        self.current
            .as_ref()
            .is_some_and(|plan| !plan.is_complete() && plan.posture() == posture)
    }

    /// Install `plan` if the interruption contract allows it. Returns
    /// whether the slot changed.
    pub fn propose(&mut self, plan: Plan) -> bool {
        if !self.can_interrupt_for(plan.posture()) {
            return false;
        }
        info!("installing plan: {}", plan.situation());
        self.current = Some(plan);
        true
    }

    /// Drop the current plan in favor of a not-yet-built plan with
    /// `posture`, if the contract allows it. The slot is left empty so
    /// the tactical layer can build fresh next tick.
    pub fn cancel_for(&mut self, posture: Posture) -> bool {
        if self.current.is_none() || !self.can_interrupt_for(posture) {
            return false;
        }
        info!("canceling current plan for {posture:?}");
        self.current = None;
        true
    }

    /// One tick of execution: the current plan's command if it has one,
    /// otherwise a traversal flip if the steering collaborator offers
    /// one, otherwise plain pursuit of the target.
    pub fn output(&mut self, input: &TickInput, steering: &dyn Steering) -> Controls {
        if let Some(plan) = &mut self.current {
            if let Some(controls) = plan.get_output(input) {
                return controls;
            }
        }
        // Whatever was current has nothing more to say.
        self.current = None;

        if let Some(mut flip) = steering.sensible_flip(&input.vehicle, input.target_position) {
            if let Some(controls) = flip.get_output(input) {
                info!("committing to traversal flip");
                self.current = Some(flip);
                return controls;
            }
        }

        steering.steer_toward(&input.vehicle, input.target_position)
    }
}
