//! Strike readiness evaluation for ARENABOT.
//!
//! Pure functions that map the vehicle's current state and a predicted
//! contact space-time to go/no-go judgments per maneuver class. No side
//! effects, no mutation — safe to call every tick for every candidate.

pub mod checklist;
pub mod profile;
pub mod readiness;

pub use arenabot_core as core;

#[cfg(test)]
mod tests;
