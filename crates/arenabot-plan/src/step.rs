//! The atomic unit of execution: one capability producing at most one
//! actuator command per tick.
//!
//! Steps never fail. "Nothing left to contribute" is the expected way a
//! step retires, signalled by returning `None` from `advance`.

use arenabot_core::constants::*;
use arenabot_core::controls::Controls;
use arenabot_core::types::{SpaceTime, TickInput};

use crate::plan::Plan;

/// A queued micro-action. Closed variant set; `advance` is the single
/// polymorphic operation.
#[derive(Debug, Clone)]
pub enum Step {
    /// Fixed command held verbatim for a wall-clock duration, ignoring
    /// everything about the tick input except its clock. Used for
    /// ballistic commitments where closed-loop correction would
    /// destabilize the maneuver.
    Blind(BlindStep),
    /// Fixed command held for an exact number of ticks — immune to
    /// frame-rate variance, which matters for digital actuator edges.
    Tap(TapStep),
    /// Closed-loop command recomputed from the current snapshot.
    Conditional(ConditionalStep),
    /// A whole sub-plan embedded as one step (composition, not
    /// flattening).
    Composite(Box<Plan>),
}

impl Step {
    /// Produce this tick's command, or `None` once the step has nothing
    /// left to contribute.
    pub fn advance(&mut self, input: &TickInput) -> Option<Controls> {
        match self {
            Step::Blind(step) => step.advance(input),
            Step::Tap(step) => step.advance(),
            Step::Conditional(step) => step.advance(input),
            Step::Composite(plan) => plan.get_output(input),
        }
    }

    /// Whether the arbiter may preempt the owning plan while this step
    /// is current. Plan-level `unstoppable` overrides this either way.
    pub fn can_interrupt(&self) -> bool {
        match self {
            Step::Blind(_) | Step::Tap(_) => true,
            Step::Conditional(step) => step.can_interrupt(),
            Step::Composite(plan) => plan.can_interrupt(),
        }
    }

    /// Human-readable status for telemetry.
    pub fn situation(&self) -> String {
        match self {
            Step::Blind(_) => "Holding a blind commitment".to_string(),
            Step::Tap(_) => "Tapping controls".to_string(),
            Step::Conditional(step) => step.situation().to_string(),
            Step::Composite(plan) => plan.situation(),
        }
    }
}

/// Emits a fixed command until a wall-clock duration elapses. The clock
/// latches on the first advance.
#[derive(Debug, Clone)]
pub struct BlindStep {
    controls: Controls,
    duration: f64,
    started_at: Option<f64>,
}

impl BlindStep {
    pub fn new(controls: Controls, duration: f64) -> Self {
        Self {
            controls,
            duration,
            started_at: None,
        }
    }

    fn advance(&mut self, input: &TickInput) -> Option<Controls> {
        let now = input.vehicle.time;
        let started = *self.started_at.get_or_insert(now);
        if now - started < self.duration {
            Some(self.controls)
        } else {
            None
        }
    }
}

/// Emits a fixed command for exactly N ticks, independent of how much
/// wall-clock time those ticks span.
#[derive(Debug, Clone)]
pub struct TapStep {
    controls: Controls,
    remaining: u32,
}

impl TapStep {
    pub fn new(ticks: u32, controls: Controls) -> Self {
        Self {
            controls,
            remaining: ticks,
        }
    }

    fn advance(&mut self) -> Option<Controls> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.controls)
    }
}

/// Closed-loop steps: output recomputed every tick from the snapshot,
/// completion decided by a measured condition.
#[derive(Debug, Clone)]
pub enum ConditionalStep {
    MidairStrike(MidairStrikeStep),
    LandGracefully(LandGracefullyStep),
    LandMindlessly(LandMindlesslyStep),
}

impl ConditionalStep {
    fn advance(&mut self, input: &TickInput) -> Option<Controls> {
        match self {
            ConditionalStep::MidairStrike(step) => step.advance(input),
            ConditionalStep::LandGracefully(step) => step.advance(input),
            ConditionalStep::LandMindlessly(step) => step.advance(input),
        }
    }

    fn can_interrupt(&self) -> bool {
        // A strike in flight must not be abandoned; landings may be.
        !matches!(self, ConditionalStep::MidairStrike(_))
    }

    fn situation(&self) -> &'static str {
        match self {
            ConditionalStep::MidairStrike(_) => "Striking midair",
            ConditionalStep::LandGracefully(_) => "Landing gracefully",
            ConditionalStep::LandMindlessly(_) => "Landing mindlessly",
        }
    }
}

/// Boost/pitch/yaw correction toward the contact point this step was
/// built against. The contact is captured at construction so the step
/// can never drift onto a different prediction than the checklist that
/// justified it.
#[derive(Debug, Clone)]
pub struct MidairStrikeStep {
    contact: SpaceTime,
}

impl MidairStrikeStep {
    pub fn new(contact: SpaceTime) -> Self {
        Self { contact }
    }

    fn advance(&mut self, input: &TickInput) -> Option<Controls> {
        let vehicle = &input.vehicle;
        if vehicle.time >= self.contact.time {
            return None;
        }
        let to_contact = self.contact.space - vehicle.position;
        if to_contact.length() < STRIKE_CONTACT_RADIUS {
            return None;
        }

        let desired = to_contact.normalize_or_zero();
        let nose = vehicle.orientation.nose;
        let pitch = (desired.z - nose.z) * MIDAIR_PITCH_GAIN;
        let yaw = vehicle.correction_angle_to(self.contact.space) * MIDAIR_YAW_GAIN;
        let aligned = nose.dot(desired) > MIDAIR_BOOST_ALIGNMENT;

        Some(
            Controls::new()
                .with_pitch(pitch)
                .with_yaw(yaw)
                .with_boost(aligned),
        )
    }
}

/// Level the vehicle while airborne so the wheels meet the floor first.
#[derive(Debug, Clone, Default)]
pub struct LandGracefullyStep;

impl LandGracefullyStep {
    fn advance(&mut self, input: &TickInput) -> Option<Controls> {
        let vehicle = &input.vehicle;
        if vehicle.is_on_ground() {
            return None;
        }
        let nose = vehicle.orientation.nose;
        let right = vehicle.orientation.right;
        Some(
            Controls::new()
                .with_pitch(-nose.z * LEVEL_ATTITUDE_GAIN)
                .with_roll(-right.z * LEVEL_ATTITUDE_GAIN),
        )
    }
}

/// Hold throttle and wait for the floor; only pitch gets any attention.
#[derive(Debug, Clone, Default)]
pub struct LandMindlesslyStep;

impl LandMindlesslyStep {
    fn advance(&mut self, input: &TickInput) -> Option<Controls> {
        let vehicle = &input.vehicle;
        if vehicle.is_on_ground() {
            return None;
        }
        Some(
            Controls::new()
                .with_throttle(1.0)
                .with_pitch(-vehicle.orientation.nose.z * LEVEL_ATTITUDE_GAIN),
        )
    }
}
