//! Ordered, posture-tagged queue of steps — at most one actuator command
//! per tick.

use std::collections::VecDeque;

use arenabot_core::controls::Controls;
use arenabot_core::enums::Posture;
use arenabot_core::types::TickInput;

use crate::step::Step;

/// Lifecycle of a plan. Activation is implicit on first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanPhase {
    Pending,
    Active,
    Complete,
}

/// An ordered sequence of steps serving one tactical intent.
///
/// The plan, not the step, tracks which step is current. A completed
/// plan yields `None` forever; it never panics on further queries.
#[derive(Debug, Clone)]
pub struct Plan {
    posture: Posture,
    unstoppable: bool,
    phase: PlanPhase,
    steps: VecDeque<Step>,
}

impl Plan {
    pub fn new(posture: Posture) -> Self {
        Self {
            posture,
            unstoppable: false,
            phase: PlanPhase::Pending,
            steps: VecDeque::new(),
        }
    }

    /// Append a step (builder style; insertion order = execution order).
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push_back(step);
        self
    }

    /// Splice another plan's steps onto the end of this one
    /// (composition at construction time, not aliasing).
    pub fn append_plan(mut self, other: Plan) -> Self {
        self.steps.extend(other.steps);
        self
    }

    /// Re-tag the plan with the posture it will serve.
    pub fn with_posture(mut self, posture: Posture) -> Self {
        self.posture = posture;
        self
    }

    /// Forbid preemption until the queue drains. Reserved for ballistic
    /// sequences whose abort would desynchronize the vehicle's physical
    /// rotation state from the scheduler's assumptions.
    pub fn unstoppable(mut self) -> Self {
        self.unstoppable = true;
        self
    }

    pub fn posture(&self) -> Posture {
        self.posture
    }

    pub fn phase(&self) -> PlanPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == PlanPhase::Complete
    }

    pub fn is_unstoppable(&self) -> bool {
        self.unstoppable
    }

    /// True when the arbiter may discard this plan for a dominant
    /// posture.
    pub fn can_interrupt(&self) -> bool {
        if self.is_complete() {
            return true;
        }
        if self.unstoppable {
            return false;
        }
        self.steps.front().map_or(true, Step::can_interrupt)
    }

    /// Advance to this tick's command.
    ///
    /// Steps that have nothing left to contribute are dropped and the
    /// next step is consulted within the same tick, so a zero-cost step
    /// never burns a tick. An exhausted queue completes the plan and
    /// yields `None` (then and forever after).
    pub fn get_output(&mut self, input: &TickInput) -> Option<Controls> {
        if self.phase == PlanPhase::Complete {
            return None;
        }
        self.phase = PlanPhase::Active;

        while let Some(step) = self.steps.front_mut() {
            if let Some(controls) = step.advance(input) {
                return Some(controls);
            }
            self.steps.pop_front();
        }

        self.phase = PlanPhase::Complete;
        None
    }

    /// Human-readable description of what the plan is doing right now.
    pub fn situation(&self) -> String {
        match self.steps.front() {
            Some(step) => format!("{:?}: {}", self.posture, step.situation()),
            None => format!("{:?}: complete", self.posture),
        }
    }
}
