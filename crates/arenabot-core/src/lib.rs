//! Core types and definitions for the ARENABOT agent.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometric and snapshot types, actuator controls, enums, tuning
//! constants, and closed-form maneuver timing math. It carries no
//! behavior beyond small helpers on the types themselves.

pub mod constants;
pub mod controls;
pub mod enums;
pub mod motion;
pub mod types;
