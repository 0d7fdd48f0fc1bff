//! Plan/step scheduling for ARENABOT.
//!
//! A `Plan` is an ordered, posture-tagged queue of `Step`s advanced at
//! most one actuator command per tick. The `Arbiter` owns the single
//! current plan and enforces the posture interruption contract; the
//! planner converts readiness checklists into launch plans.

pub mod arbiter;
pub mod plan;
pub mod planner;
pub mod posture;
pub mod set_pieces;
pub mod step;

pub use arenabot_core as core;
