//! Canned maneuver plans, parameterized by the readiness timing fields.
//!
//! Every builder returns a fresh plan tagged `Neutral`; the caller
//! re-tags it with the posture it will serve. Ballistic sequences come
//! back already flagged unstoppable.

use arenabot_core::constants::*;
use arenabot_core::controls::Controls;
use arenabot_core::enums::Posture;
use arenabot_core::motion;
use arenabot_core::types::SpaceTime;

use crate::plan::Plan;
use crate::step::{
    BlindStep, ConditionalStep, LandGracefullyStep, LandMindlesslyStep, MidairStrikeStep, Step,
    TapStep,
};

/// Ground front flip: press, release, dodge, settle, recover.
pub fn front_flip() -> Plan {
    let nose_down_throttle = Controls::new().with_pitch(-1.0).with_throttle(1.0);
    Plan::new(Posture::Neutral)
        .unstoppable()
        .with_step(Step::Tap(TapStep::new(2, nose_down_throttle.with_jump(true))))
        .with_step(Step::Tap(TapStep::new(2, nose_down_throttle)))
        .with_step(Step::Tap(TapStep::new(2, nose_down_throttle.with_jump(true))))
        .with_step(Step::Blind(BlindStep::new(
            nose_down_throttle,
            FLIP_SETTLE_SECONDS,
        )))
        .with_step(Step::Conditional(ConditionalStep::LandMindlessly(
            LandMindlesslyStep,
        )))
}

/// Sideways dodge, mirrored by `left`.
pub fn side_flip(left: bool) -> Plan {
    let lateral = if left { 1.0 } else { -1.0 };
    let dodge = Controls::new()
        .with_jump(true)
        .with_yaw(lateral)
        .with_steer(lateral);
    Plan::new(Posture::Neutral)
        .unstoppable()
        .with_step(Step::Tap(TapStep::new(
            2,
            Controls::new().with_jump(true).with_throttle(1.0),
        )))
        .with_step(Step::Tap(TapStep::new(2, Controls::new().with_throttle(1.0))))
        .with_step(Step::Tap(TapStep::new(2, dodge)))
        .with_step(Step::Blind(BlindStep::new(
            Controls::new().with_throttle(1.0),
            FLIP_SETTLE_SECONDS,
        )))
        .with_step(Step::Conditional(ConditionalStep::LandMindlessly(
            LandMindlesslyStep,
        )))
}

/// Mash jump sized for the contact height, then dodge into the ball.
///
/// `None` when the contact sits above the mash-jump apex — the caller
/// gets no way to build a jump hit it could never execute.
pub fn jump_hit(contact: &SpaceTime) -> Option<Plan> {
    let ascent = motion::seconds_to_mash_jump_height(contact.space.z)?;
    let plan = Plan::new(Posture::Neutral)
        .unstoppable()
        .with_step(Step::Blind(BlindStep::new(
            Controls::new().with_jump(true),
            ascent,
        )))
        // One clean release frame so the dodge press registers as an edge.
        .with_step(Step::Tap(TapStep::new(1, Controls::new())))
        .with_step(Step::Tap(TapStep::new(
            2,
            Controls::new().with_jump(true).with_pitch(-1.0),
        )))
        .with_step(Step::Conditional(ConditionalStep::LandMindlessly(
            LandMindlesslyStep,
        )));
    Some(plan)
}

/// Aerial launch: blind two-stage ignition, closed-loop flight to the
/// contact, graceful recovery.
pub fn perform_aerial(contact: SpaceTime) -> Plan {
    Plan::new(Posture::Neutral)
        .unstoppable()
        .with_step(Step::Blind(BlindStep::new(
            Controls::new().with_jump(true).with_pitch(1.0),
            AERIAL_LAUNCH_HOLD_SECONDS,
        )))
        .with_step(Step::Blind(BlindStep::new(
            Controls::new().with_jump(true).with_pitch(-1.0).with_boost(true),
            AERIAL_LAUNCH_HOLD_SECONDS,
        )))
        .with_step(Step::Conditional(ConditionalStep::MidairStrike(
            MidairStrikeStep::new(contact),
        )))
        .with_step(Step::Conditional(ConditionalStep::LandGracefully(
            LandGracefullyStep,
        )))
}
